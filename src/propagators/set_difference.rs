use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::SetVar;

/// Propagator for `difference = minuend \ subtrahend`.
///
/// Arc-consistent on memberships: a value is in the difference exactly when
/// it is in the minuend and not in the subtrahend, and each of the three
/// memberships is decided as soon as the other two are.
#[derive(Debug)]
pub(crate) struct SetDifferencePropagator {
    minuend: SetVar,
    subtrahend: SetVar,
    difference: SetVar,
}

impl SetDifferencePropagator {
    pub(crate) fn new(minuend: SetVar, subtrahend: SetVar, difference: SetVar) -> Self {
        SetDifferencePropagator {
            minuend,
            subtrahend,
            difference,
        }
    }
}

impl Propagator for SetDifferencePropagator {
    fn name(&self) -> &str {
        "SetDifference"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        context.register_set(self.minuend, SetDomainEvents::MEMBERSHIP);
        context.register_set(self.subtrahend, SetDomainEvents::MEMBERSHIP);
        context.register_set(self.difference, SetDomainEvents::MEMBERSHIP);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        for value in context.env(self.difference).to_vec() {
            if !context.env_contains(self.minuend, value)
                || context.ker_contains(self.subtrahend, value)
            {
                context.env_remove(self.difference, value)?;
            }
        }

        for value in context.ker(self.difference).to_vec() {
            context.ker_add(self.minuend, value)?;
            context.env_remove(self.subtrahend, value)?;
        }

        for value in context.ker(self.minuend).to_vec() {
            if !context.env_contains(self.subtrahend, value) {
                context.ker_add(self.difference, value)?;
            } else if !context.env_contains(self.difference, value) {
                context.ker_add(self.subtrahend, value)?;
            }
        }

        // A minuend element lands in the difference or in the subtrahend.
        for value in context.env(self.minuend).to_vec() {
            if !context.env_contains(self.difference, value)
                && !context.env_contains(self.subtrahend, value)
            {
                context.env_remove(self.minuend, value)?;
            }
        }
        Ok(())
    }
}
