use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::BoolVar;
use crate::variables::IntVar;

/// Propagator for `literal ⟺ var = value`. Arc-consistent in both
/// directions.
#[derive(Debug)]
pub(crate) struct ReifyEqualPropagator {
    literal: BoolVar,
    var: IntVar,
    value: i32,
}

impl ReifyEqualPropagator {
    pub(crate) fn new(literal: BoolVar, var: IntVar, value: i32) -> Self {
        ReifyEqualPropagator {
            literal,
            var,
            value,
        }
    }
}

impl Propagator for ReifyEqualPropagator {
    fn name(&self) -> &str {
        "ReifyEqual"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        context.register_bool(self.literal, DomainEvents::ASSIGN);
        context.register_int(self.var, DomainEvents::ANY_INT);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        if context.is_true(self.literal) {
            context.fix(self.var, self.value)?;
        } else if context.is_false(self.literal) {
            if context.contains(self.var, self.value) {
                context.remove(self.var, self.value)?;
            }
        } else if !context.contains(self.var, self.value) {
            context.fix_bool(self.literal, false)?;
        } else if context.fixed_value(self.var) == Some(self.value) {
            context.fix_bool(self.literal, true)?;
        }
        Ok(())
    }
}

/// Propagator for `literal ⟺ var ≠ value`. The mirror image of
/// [`ReifyEqualPropagator`].
#[derive(Debug)]
pub(crate) struct ReifyNotEqualPropagator {
    literal: BoolVar,
    var: IntVar,
    value: i32,
}

impl ReifyNotEqualPropagator {
    pub(crate) fn new(literal: BoolVar, var: IntVar, value: i32) -> Self {
        ReifyNotEqualPropagator {
            literal,
            var,
            value,
        }
    }
}

impl Propagator for ReifyNotEqualPropagator {
    fn name(&self) -> &str {
        "ReifyNotEqual"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        context.register_bool(self.literal, DomainEvents::ASSIGN);
        context.register_int(self.var, DomainEvents::ANY_INT);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        if context.is_true(self.literal) {
            if context.contains(self.var, self.value) {
                context.remove(self.var, self.value)?;
            }
        } else if context.is_false(self.literal) {
            context.fix(self.var, self.value)?;
        } else if !context.contains(self.var, self.value) {
            context.fix_bool(self.literal, true)?;
        } else if context.fixed_value(self.var) == Some(self.value) {
            context.fix_bool(self.literal, false)?;
        }
        Ok(())
    }
}
