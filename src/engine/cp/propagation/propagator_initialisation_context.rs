use super::PropagatorId;
use super::ReadDomains;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::Assignments;
use crate::engine::cp::WatchListCP;
use crate::variables::BoolVar;
use crate::variables::IntVar;
use crate::variables::SetVar;

/// The context handed to [`super::Propagator::initialise_at_root`]: read
/// access to the initial domains plus event registration. Registration is
/// the only way a propagator gets woken later; an unregistered variable
/// never re-enqueues it.
#[derive(Debug)]
pub(crate) struct PropagatorInitialisationContext<'a> {
    assignments: &'a Assignments,
    watch_list: &'a mut WatchListCP,
    propagator_id: PropagatorId,
}

impl<'a> PropagatorInitialisationContext<'a> {
    pub(crate) fn new(
        assignments: &'a Assignments,
        watch_list: &'a mut WatchListCP,
        propagator_id: PropagatorId,
    ) -> Self {
        PropagatorInitialisationContext {
            assignments,
            watch_list,
            propagator_id,
        }
    }

    pub(crate) fn register_int(&mut self, var: IntVar, events: DomainEvents) {
        self.watch_list.watch_int(var, events, self.propagator_id);
    }

    pub(crate) fn register_bool(&mut self, var: BoolVar, events: DomainEvents) {
        self.watch_list
            .watch_int(var.as_int(), events, self.propagator_id);
    }

    pub(crate) fn register_set(&mut self, var: SetVar, events: SetDomainEvents) {
        self.watch_list.watch_set(var, events, self.propagator_id);
    }
}

impl ReadDomains for PropagatorInitialisationContext<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}
