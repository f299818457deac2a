//! Event kinds used by the wake-up machinery. A propagator registers for a
//! set of events per watched variable; the solver only re-enqueues it when a
//! drained event intersects that set.

use enumset::enum_set;
use enumset::EnumSet;
use enumset::EnumSetType;

/// A change to the domain of an integer variable.
#[derive(EnumSetType, Debug)]
pub(crate) enum IntDomainEvent {
    /// The domain became a singleton.
    Assign,
    /// The lower bound increased.
    LowerBound,
    /// The upper bound decreased.
    UpperBound,
    /// One or more values were removed (includes bound changes).
    Removal,
}

/// A change to one of the three domains of a set variable.
#[derive(EnumSetType, Debug)]
pub(crate) enum SetDomainEvent {
    /// A value was removed from the envelope.
    EnvRemoval,
    /// A value was added to the kernel.
    KerAddition,
    /// The cardinality bounds were tightened.
    Card,
}

/// Event subscriptions for an integer variable.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DomainEvents {
    events: EnumSet<IntDomainEvent>,
}

impl DomainEvents {
    pub(crate) const ANY_INT: DomainEvents = DomainEvents::create(enum_set!(
        IntDomainEvent::Assign
            | IntDomainEvent::LowerBound
            | IntDomainEvent::UpperBound
            | IntDomainEvent::Removal
    ));
    pub(crate) const ASSIGN: DomainEvents =
        DomainEvents::create(enum_set!(IntDomainEvent::Assign));
    pub(crate) const BOUNDS: DomainEvents = DomainEvents::create(enum_set!(
        IntDomainEvent::Assign | IntDomainEvent::LowerBound | IntDomainEvent::UpperBound
    ));

    const fn create(events: EnumSet<IntDomainEvent>) -> DomainEvents {
        DomainEvents { events }
    }

    pub(crate) fn events(&self) -> EnumSet<IntDomainEvent> {
        self.events
    }
}

/// Event subscriptions for a set variable.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SetDomainEvents {
    events: EnumSet<SetDomainEvent>,
}

impl SetDomainEvents {
    pub(crate) const ANY_SET: SetDomainEvents = SetDomainEvents::create(enum_set!(
        SetDomainEvent::EnvRemoval | SetDomainEvent::KerAddition | SetDomainEvent::Card
    ));
    pub(crate) const MEMBERSHIP: SetDomainEvents = SetDomainEvents::create(enum_set!(
        SetDomainEvent::EnvRemoval | SetDomainEvent::KerAddition
    ));
    pub(crate) const CARD: SetDomainEvents =
        SetDomainEvents::create(enum_set!(SetDomainEvent::Card));

    const fn create(events: EnumSet<SetDomainEvent>) -> SetDomainEvents {
        SetDomainEvents { events }
    }

    pub(crate) fn events(&self) -> EnumSet<SetDomainEvent> {
        self.events
    }
}
