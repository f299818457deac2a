//! The variable store: parallel arenas of integer domains and set triples,
//! the backtracking trail, and the pending-event buffer drained by the
//! solver's wake-up machinery.
//!
//! Every narrowing in the crate flows through the commit methods here. This
//! is the single integration point between propagation and the trail; a
//! propagator never undoes anything itself.

use enumset::enum_set;
use enumset::EnumSet;

use super::domain_events::IntDomainEvent;
use super::domain_events::SetDomainEvent;
use crate::basic_types::Solution;
use crate::domains::Domain;
use crate::domains::EmptyDomain;
use crate::persimmon_assert_extreme;
use crate::persimmon_assert_simple;
use crate::variables::IntVar;
use crate::variables::SetVar;

/// A pending domain change, recorded when a domain is narrowed and consumed
/// by the solver to wake interested propagators.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Event {
    Int(IntVar, EnumSet<IntDomainEvent>),
    Set(SetVar, EnumSet<SetDomainEvent>),
}

/// The envelope/kernel/cardinality triple of one set variable. `env` and
/// `ker` are sorted ascending; `ker` is always a subset of `env`.
#[derive(Debug, Clone)]
struct SetTriple {
    env: Vec<i32>,
    ker: Vec<i32>,
    card: Domain,
}

#[derive(Debug)]
enum TrailEntry {
    Int { var: IntVar, domain: Domain },
    Env { var: SetVar, env: Vec<i32> },
    Ker { var: SetVar, ker: Vec<i32> },
    Card { var: SetVar, card: Domain },
}

#[derive(Debug, Default)]
pub(crate) struct Assignments {
    int_domains: Vec<Domain>,
    sets: Vec<SetTriple>,
    trail: Vec<TrailEntry>,
    levels: Vec<usize>,
    events: Vec<Event>,
}

impl Assignments {
    pub(crate) fn new_int_variable(&mut self, domain: Domain) -> IntVar {
        let var = IntVar::new(self.int_domains.len() as u32);
        self.int_domains.push(domain);
        var
    }

    /// Creates a set variable over the given envelope. `values` is sorted and
    /// deduplicated; the kernel starts empty and the cardinality is clamped
    /// to `[card.low, |env|]`.
    pub(crate) fn new_set_variable(&mut self, values: &[i32], card: Domain) -> SetVar {
        let mut env = values.to_vec();
        env.sort_unstable();
        env.dedup();
        persimmon_assert_simple!(
            card.low() >= 0 && card.low() as usize <= env.len(),
            "initial cardinality {card} is infeasible for an envelope of {} values",
            env.len()
        );
        let card = card
            .tighten_high(env.len() as i32)
            .expect("cardinality lower bound was checked against the envelope");
        let var = SetVar::new(self.sets.len() as u32);
        self.sets.push(SetTriple {
            env,
            ker: Vec::new(),
            card,
        });
        // The initial cardinality may already decide membership, e.g. a
        // cardinality fixed to the envelope size.
        self.sync_set(var)
            .expect("a freshly created set variable cannot be inconsistent");
        var
    }

    pub(crate) fn num_int_variables(&self) -> usize {
        self.int_domains.len()
    }

    pub(crate) fn num_set_variables(&self) -> usize {
        self.sets.len()
    }

    pub(crate) fn domain(&self, var: IntVar) -> &Domain {
        &self.int_domains[var.index()]
    }

    pub(crate) fn env(&self, var: SetVar) -> &[i32] {
        &self.sets[var.index()].env
    }

    pub(crate) fn ker(&self, var: SetVar) -> &[i32] {
        &self.sets[var.index()].ker
    }

    pub(crate) fn card(&self, var: SetVar) -> &Domain {
        &self.sets[var.index()].card
    }

    pub(crate) fn is_set_fixed(&self, var: SetVar) -> bool {
        let triple = &self.sets[var.index()];
        triple.env.len() == triple.ker.len()
    }

    /// True when every variable is instantiated.
    pub(crate) fn is_complete(&self) -> bool {
        self.int_domains.iter().all(Domain::is_singleton)
            && self
                .sets
                .iter()
                .all(|triple| triple.env.len() == triple.ker.len())
    }

    /// Snapshot of a complete assignment.
    pub(crate) fn snapshot(&self) -> Solution {
        persimmon_assert_simple!(self.is_complete());
        let ints = self.int_domains.iter().map(|domain| domain.low()).collect();
        let sets = self
            .sets
            .iter()
            .map(|triple| triple.env.clone().into_boxed_slice())
            .collect();
        Solution::new(ints, sets)
    }

    // Integer narrowing.

    pub(crate) fn tighten_lower_bound(
        &mut self,
        var: IntVar,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        let narrowed = self.int_domains[var.index()].tighten_low(bound)?;
        self.commit_int(var, narrowed);
        Ok(())
    }

    pub(crate) fn tighten_upper_bound(
        &mut self,
        var: IntVar,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        let narrowed = self.int_domains[var.index()].tighten_high(bound)?;
        self.commit_int(var, narrowed);
        Ok(())
    }

    pub(crate) fn remove_value(&mut self, var: IntVar, value: i32) -> Result<(), EmptyDomain> {
        let narrowed = self.int_domains[var.index()].remove(value)?;
        self.commit_int(var, narrowed);
        Ok(())
    }

    pub(crate) fn instantiate(&mut self, var: IntVar, value: i32) -> Result<(), EmptyDomain> {
        if !self.int_domains[var.index()].contains(value) {
            return Err(EmptyDomain);
        }
        self.commit_int(var, Domain::singleton(value));
        Ok(())
    }

    pub(crate) fn intersect(&mut self, var: IntVar, other: &Domain) -> Result<(), EmptyDomain> {
        let narrowed = self.int_domains[var.index()].intersect(other)?;
        self.commit_int(var, narrowed);
        Ok(())
    }

    fn commit_int(&mut self, var: IntVar, narrowed: Domain) {
        let current = &self.int_domains[var.index()];
        if *current == narrowed {
            return;
        }
        persimmon_assert_extreme!(
            narrowed.iter().all(|v| current.contains(v)),
            "narrowing of {var} widened its domain"
        );
        let mut events = enum_set!(IntDomainEvent::Removal);
        if narrowed.low() > current.low() {
            events |= IntDomainEvent::LowerBound;
        }
        if narrowed.high() < current.high() {
            events |= IntDomainEvent::UpperBound;
        }
        if narrowed.is_singleton() && !current.is_singleton() {
            events |= IntDomainEvent::Assign;
        }
        if self.decision_level() > 0 {
            self.trail.push(TrailEntry::Int {
                var,
                domain: current.clone(),
            });
        }
        self.int_domains[var.index()] = narrowed;
        self.events.push(Event::Int(var, events));
    }

    // Set narrowing.

    /// Removes `value` from the envelope. Removing a kernel value is a
    /// contradiction; removing an absent value is a no-op.
    pub(crate) fn env_remove(&mut self, var: SetVar, value: i32) -> Result<(), EmptyDomain> {
        let triple = &self.sets[var.index()];
        let Ok(position) = triple.env.binary_search(&value) else {
            return Ok(());
        };
        if triple.ker.binary_search(&value).is_ok() {
            return Err(EmptyDomain);
        }
        if self.decision_level() > 0 {
            self.trail.push(TrailEntry::Env {
                var,
                env: triple.env.clone(),
            });
        }
        let _ = self.sets[var.index()].env.remove(position);
        self.events
            .push(Event::Set(var, enum_set!(SetDomainEvent::EnvRemoval)));
        self.sync_set(var)
    }

    /// Adds `value` to the kernel. Adding a value outside the envelope is a
    /// contradiction; adding a present value is a no-op.
    pub(crate) fn ker_add(&mut self, var: SetVar, value: i32) -> Result<(), EmptyDomain> {
        let triple = &self.sets[var.index()];
        let position = match triple.ker.binary_search(&value) {
            Ok(_) => return Ok(()),
            Err(position) => position,
        };
        if triple.env.binary_search(&value).is_err() {
            return Err(EmptyDomain);
        }
        if self.decision_level() > 0 {
            self.trail.push(TrailEntry::Ker {
                var,
                ker: triple.ker.clone(),
            });
        }
        self.sets[var.index()].ker.insert(position, value);
        self.events
            .push(Event::Set(var, enum_set!(SetDomainEvent::KerAddition)));
        self.sync_set(var)
    }

    pub(crate) fn tighten_card_lower_bound(
        &mut self,
        var: SetVar,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        let narrowed = self.sets[var.index()].card.tighten_low(bound)?;
        self.commit_card(var, narrowed);
        self.sync_set(var)
    }

    pub(crate) fn tighten_card_upper_bound(
        &mut self,
        var: SetVar,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        let narrowed = self.sets[var.index()].card.tighten_high(bound)?;
        self.commit_card(var, narrowed);
        self.sync_set(var)
    }

    fn commit_card(&mut self, var: SetVar, narrowed: Domain) {
        if self.sets[var.index()].card == narrowed {
            return;
        }
        if self.decision_level() > 0 {
            let card = self.sets[var.index()].card.clone();
            self.trail.push(TrailEntry::Card { var, card });
        }
        self.sets[var.index()].card = narrowed;
        self.events
            .push(Event::Set(var, enum_set!(SetDomainEvent::Card)));
    }

    /// Restores the co-variance invariants of one set triple:
    /// `|ker| <= card.low`, `card.high <= |env|`, and the two forcing
    /// cascades (cardinality at its floor fills the kernel, cardinality at
    /// its ceiling trims the envelope).
    fn sync_set(&mut self, var: SetVar) -> Result<(), EmptyDomain> {
        loop {
            let triple = &self.sets[var.index()];
            let env_len = triple.env.len() as i32;
            let ker_len = triple.ker.len() as i32;
            let narrowed = triple
                .card
                .tighten_low(ker_len)?
                .tighten_high(env_len)?;
            self.commit_card(var, narrowed);

            let triple = &self.sets[var.index()];
            if triple.card.high() == ker_len && env_len > ker_len {
                // Every remaining envelope-only value is ruled out.
                if self.decision_level() > 0 {
                    self.trail.push(TrailEntry::Env {
                        var,
                        env: triple.env.clone(),
                    });
                }
                let ker = self.sets[var.index()].ker.clone();
                self.sets[var.index()].env = ker;
                self.events
                    .push(Event::Set(var, enum_set!(SetDomainEvent::EnvRemoval)));
                continue;
            }
            if triple.card.low() == env_len && ker_len < env_len {
                // Every envelope value is certainly a member.
                if self.decision_level() > 0 {
                    self.trail.push(TrailEntry::Ker {
                        var,
                        ker: triple.ker.clone(),
                    });
                }
                let env = self.sets[var.index()].env.clone();
                self.sets[var.index()].ker = env;
                self.events
                    .push(Event::Set(var, enum_set!(SetDomainEvent::KerAddition)));
                continue;
            }
            break;
        }
        self.debug_check_set_invariants(var);
        Ok(())
    }

    fn debug_check_set_invariants(&self, var: SetVar) {
        let triple = &self.sets[var.index()];
        persimmon_assert_extreme!(
            triple
                .ker
                .iter()
                .all(|value| triple.env.binary_search(value).is_ok()),
            "kernel of {var} is not a subset of its envelope"
        );
        persimmon_assert_extreme!(
            triple.ker.len() as i32 <= triple.card.low()
                && triple.card.high() <= triple.env.len() as i32,
            "cardinality of {var} is out of sync with its envelope/kernel"
        );
    }

    // Trail management.

    pub(crate) fn increase_decision_level(&mut self) {
        self.levels.push(self.trail.len());
    }

    pub(crate) fn decision_level(&self) -> usize {
        self.levels.len()
    }

    /// Undoes every narrowing recorded since the most recent
    /// [`Assignments::increase_decision_level`] call. Pending events are
    /// discarded; they describe narrowings that no longer exist.
    pub(crate) fn backtrack_one_level(&mut self) {
        let mark = self
            .levels
            .pop()
            .expect("cannot backtrack past the root level");
        while self.trail.len() > mark {
            match self.trail.pop().expect("trail length was checked") {
                TrailEntry::Int { var, domain } => self.int_domains[var.index()] = domain,
                TrailEntry::Env { var, env } => self.sets[var.index()].env = env,
                TrailEntry::Ker { var, ker } => self.sets[var.index()].ker = ker,
                TrailEntry::Card { var, card } => self.sets[var.index()].card = card,
            }
        }
        self.events.clear();
    }

    pub(crate) fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
