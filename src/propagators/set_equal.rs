use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::SetVar;

/// Propagator for `left = right`. Arc-consistent: envelopes are intersected,
/// kernels are merged, and cardinality bounds are exchanged.
#[derive(Debug)]
pub(crate) struct SetEqualPropagator {
    left: SetVar,
    right: SetVar,
}

impl SetEqualPropagator {
    pub(crate) fn new(left: SetVar, right: SetVar) -> Self {
        SetEqualPropagator { left, right }
    }
}

impl Propagator for SetEqualPropagator {
    fn name(&self) -> &str {
        "SetEqual"
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
        for (a, b) in [(self.left, self.right), (self.right, self.left)] {
            for value in context.env(a).to_vec() {
                if !context.env_contains(b, value) {
                    context.env_remove(a, value)?;
                }
            }
            for value in context.ker(b).to_vec() {
                context.ker_add(a, value)?;
            }
            context.set_card_lower_bound(a, context.card_lower_bound(b))?;
            context.set_card_upper_bound(a, context.card_upper_bound(b))?;
        }
        Ok(())
    }
}
