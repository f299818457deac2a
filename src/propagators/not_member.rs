use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::IntVar;
use crate::variables::SetVar;

/// Propagator for `element ∉ set`. Arc-consistent: kernel values leave the
/// integer domain and a fixed element leaves the envelope.
#[derive(Debug)]
pub(crate) struct NotMemberPropagator {
    element: IntVar,
    set: SetVar,
}

impl NotMemberPropagator {
    pub(crate) fn new(element: IntVar, set: SetVar) -> Self {
        NotMemberPropagator { element, set }
    }
}

impl Propagator for NotMemberPropagator {
    fn name(&self) -> &str {
        "NotMember"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        context.register_int(self.element, DomainEvents::ANY_INT);
        context.register_set(self.set, SetDomainEvents::MEMBERSHIP);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        for value in context.ker(self.set).to_vec() {
            if context.contains(self.element, value) {
                context.remove(self.element, value)?;
            }
        }
        if let Some(value) = context.fixed_value(self.element) {
            context.env_remove(self.set, value)?;
        }
        Ok(())
    }
}
