//! The reverse index from variables to interested propagators. Propagators
//! hold plain variable handles; the listener graph lives here instead of as
//! back-pointers between objects.

use enumset::EnumSet;

use super::domain_events::DomainEvents;
use super::domain_events::IntDomainEvent;
use super::domain_events::SetDomainEvent;
use super::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagatorId;
use crate::variables::IntVar;
use crate::variables::SetVar;

#[derive(Debug, Clone, Copy)]
struct Watcher<EventKind: enumset::EnumSetType> {
    propagator: PropagatorId,
    events: EnumSet<EventKind>,
}

#[derive(Debug, Default)]
pub(crate) struct WatchListCP {
    int_watchers: Vec<Vec<Watcher<IntDomainEvent>>>,
    set_watchers: Vec<Vec<Watcher<SetDomainEvent>>>,
}

impl WatchListCP {
    pub(crate) fn grow_int(&mut self) {
        self.int_watchers.push(Vec::new());
    }

    pub(crate) fn grow_set(&mut self) {
        self.set_watchers.push(Vec::new());
    }

    pub(crate) fn watch_int(&mut self, var: IntVar, events: DomainEvents, propagator: PropagatorId) {
        self.int_watchers[var.index()].push(Watcher {
            propagator,
            events: events.events(),
        });
    }

    pub(crate) fn watch_set(
        &mut self,
        var: SetVar,
        events: SetDomainEvents,
        propagator: PropagatorId,
    ) {
        self.set_watchers[var.index()].push(Watcher {
            propagator,
            events: events.events(),
        });
    }

    /// The propagators interested in any of the drained `events` on `var`.
    pub(crate) fn interested_in_int(
        &self,
        var: IntVar,
        events: EnumSet<IntDomainEvent>,
    ) -> impl Iterator<Item = PropagatorId> + '_ {
        self.int_watchers[var.index()]
            .iter()
            .filter(move |watcher| !watcher.events.is_disjoint(events))
            .map(|watcher| watcher.propagator)
    }

    pub(crate) fn interested_in_set(
        &self,
        var: SetVar,
        events: EnumSet<SetDomainEvent>,
    ) -> impl Iterator<Item = PropagatorId> + '_ {
        self.set_watchers[var.index()]
            .iter()
            .filter(move |watcher| !watcher.events.is_disjoint(events))
            .map(|watcher| watcher.propagator)
    }
}
