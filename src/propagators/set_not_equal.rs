use crate::basic_types::Contradiction;
use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::SetVar;

/// Propagator for `left ≠ right`.
///
/// A checking propagator: it never prunes, it only fails once both sides are
/// instantiated to the same set. Disequality prunes next to nothing in
/// practice and the check keeps the fixpoint cheap.
#[derive(Debug)]
pub(crate) struct SetNotEqualPropagator {
    left: SetVar,
    right: SetVar,
}

impl SetNotEqualPropagator {
    pub(crate) fn new(left: SetVar, right: SetVar) -> Self {
        SetNotEqualPropagator { left, right }
    }
}

impl Propagator for SetNotEqualPropagator {
    fn name(&self) -> &str {
        "SetNotEqual"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        context.register_set(self.left, SetDomainEvents::ANY_SET);
        context.register_set(self.right, SetDomainEvents::ANY_SET);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        if context.is_set_fixed(self.left)
            && context.is_set_fixed(self.right)
            && context.ker(self.left) == context.ker(self.right)
        {
            return Err(Contradiction::Conflict);
        }
        Ok(())
    }
}

/// Propagator for `set ≠ constant`, the one-sided variant used when the
/// right-hand side is known up front. Checking only, like
/// [`SetNotEqualPropagator`].
#[derive(Debug)]
pub(crate) struct SetNotEqualConstantPropagator {
    set: SetVar,
    constant: Box<[i32]>,
}

impl SetNotEqualConstantPropagator {
    /// `constant` must be sorted and duplicate-free.
    pub(crate) fn new(set: SetVar, constant: Box<[i32]>) -> Self {
        SetNotEqualConstantPropagator { set, constant }
    }
}

impl Propagator for SetNotEqualConstantPropagator {
    fn name(&self) -> &str {
        "SetNotEqualConstant"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        context.register_set(self.set, SetDomainEvents::ANY_SET);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        if context.is_set_fixed(self.set) && context.ker(self.set) == &*self.constant {
            return Err(Contradiction::Conflict);
        }
        Ok(())
    }
}
