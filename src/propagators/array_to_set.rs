use fnv::FnvHashMap;

use crate::basic_types::Contradiction;
use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::IntVar;
use crate::variables::SetVar;

/// Propagator for `set = { refs[0], ..., refs[n-1] }`.
///
/// Every array slot takes a value inside the envelope, every instantiated
/// slot value is certain to be in the set, and an envelope value no slot can
/// reach is removed. A kernel value with a single remaining supporter
/// instantiates that slot.
#[derive(Debug)]
pub(crate) struct ArrayToSetPropagator {
    refs: Box<[IntVar]>,
    set: SetVar,
}

impl ArrayToSetPropagator {
    pub(crate) fn new(refs: Box<[IntVar]>, set: SetVar) -> Self {
        ArrayToSetPropagator { refs, set }
    }
}

impl Propagator for ArrayToSetPropagator {
    fn name(&self) -> &str {
        "ArrayToSet"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        for &var in self.refs.iter() {
            context.register_int(var, DomainEvents::ANY_INT);
        }
        context.register_set(self.set, SetDomainEvents::MEMBERSHIP);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        for &var in self.refs.iter() {
            let values: Vec<i32> = context.domain(var).iter().collect();
            for value in values {
                if !context.env_contains(self.set, value) {
                    context.remove(var, value)?;
                }
            }
            if let Some(value) = context.fixed_value(var) {
                context.ker_add(self.set, value)?;
            }
        }

        let env: Vec<i32> = context.env(self.set).to_vec();
        for value in env {
            let supporters: Vec<IntVar> = self
                .refs
                .iter()
                .copied()
                .filter(|&var| context.contains(var, value))
                .collect();
            if supporters.is_empty() {
                context.env_remove(self.set, value)?;
            } else if supporters.len() == 1 && context.ker_contains(self.set, value) {
                context.fix(supporters[0], value)?;
            }
        }
        Ok(())
    }
}

/// Cardinality companion of [`ArrayToSetPropagator`].
///
/// With a global cardinality `gc`, every value the set admits must be
/// achieved by exactly `gc` array slots, so `gc * |set| = refs.len()`; the
/// per-value achievability counts prune both the slot domains and the set.
/// Without one, only `|set| <= refs.len()` (and non-emptiness) is available.
#[derive(Debug)]
pub(crate) struct ArrayToSetCardPropagator {
    refs: Box<[IntVar]>,
    set: SetVar,
    global_cardinality: Option<i32>,
}

impl ArrayToSetCardPropagator {
    pub(crate) fn new(refs: Box<[IntVar]>, set: SetVar, global_cardinality: Option<i32>) -> Self {
        ArrayToSetCardPropagator {
            refs,
            set,
            global_cardinality,
        }
    }
}

impl Propagator for ArrayToSetCardPropagator {
    fn name(&self) -> &str {
        "ArrayToSetCard"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        for &var in self.refs.iter() {
            context.register_int(var, DomainEvents::ANY_INT);
        }
        context.register_set(self.set, SetDomainEvents::ANY_SET);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        let slots = self.refs.len() as i32;
        context.set_card_upper_bound(self.set, slots)?;
        if slots > 0 {
            context.set_card_lower_bound(self.set, 1)?;
        }

        let Some(gc) = self.global_cardinality else {
            return Ok(());
        };
        if slots % gc != 0 {
            // No set size can make every value hit exactly gc slots.
            return Err(Contradiction::Conflict);
        }
        context.set_card_lower_bound(self.set, slots / gc)?;
        context.set_card_upper_bound(self.set, slots / gc)?;

        let mut mandatory: FnvHashMap<i32, i32> = FnvHashMap::default();
        for &var in self.refs.iter() {
            if let Some(value) = context.fixed_value(var) {
                *mandatory.entry(value).or_insert(0) += 1;
            }
        }

        let env: Vec<i32> = context.env(self.set).to_vec();
        for value in env {
            let supporters: Vec<IntVar> = self
                .refs
                .iter()
                .copied()
                .filter(|&var| context.contains(var, value))
                .collect();
            let fixed_count = mandatory.get(&value).copied().unwrap_or(0);
            if fixed_count > gc {
                return Err(Contradiction::Conflict);
            }
            if (supporters.len() as i32) < gc {
                context.env_remove(self.set, value)?;
                continue;
            }
            if fixed_count == gc {
                // The quota for this value is filled; no other slot takes it.
                for &var in &supporters {
                    if context.fixed_value(var) != Some(value) {
                        context.remove(var, value)?;
                    }
                }
            } else if supporters.len() as i32 == gc && context.ker_contains(self.set, value) {
                for &var in &supporters {
                    context.fix(var, value)?;
                }
            }
        }
        Ok(())
    }
}
