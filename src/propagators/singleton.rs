use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::IntVar;
use crate::variables::SetVar;

/// Propagator for `set = {int}`.
///
/// The cardinality is pinned to 1 on the first call; afterwards the integer
/// domain and the envelope are kept identical, and instantiating either side
/// instantiates the other. Arc-consistent.
#[derive(Debug)]
pub(crate) struct SingletonPropagator {
    int: IntVar,
    set: SetVar,
}

impl SingletonPropagator {
    pub(crate) fn new(int: IntVar, set: SetVar) -> Self {
        SingletonPropagator { int, set }
    }
}

impl Propagator for SingletonPropagator {
    fn name(&self) -> &str {
        "Singleton"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        context.register_int(self.int, DomainEvents::ANY_INT);
        context.register_set(self.set, SetDomainEvents::ANY_SET);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        context.set_card_lower_bound(self.set, 1)?;
        context.set_card_upper_bound(self.set, 1)?;

        let int_values: Vec<i32> = context.domain(self.int).iter().collect();
        for value in int_values {
            if !context.env_contains(self.set, value) {
                context.remove(self.int, value)?;
            }
        }
        let env: Vec<i32> = context.env(self.set).to_vec();
        for value in env {
            if !context.contains(self.int, value) {
                context.env_remove(self.set, value)?;
            }
        }

        if let Some(value) = context.fixed_value(self.int) {
            context.ker_add(self.set, value)?;
        }
        // A kernel value of a cardinality-1 set is the value.
        if let Some(&value) = context.ker(self.set).first() {
            context.fix(self.int, value)?;
        }
        Ok(())
    }
}
