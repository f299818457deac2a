use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::SetVar;

/// Propagator for `union = sets[0] ∪ ... ∪ sets[k-1]`.
///
/// Every operand is a subset of the union, every union element needs at
/// least one supplier, and a needed element with a unique supplier forces
/// that supplier. Membership reasoning is arc-consistent; cardinality
/// reasoning lives in [`SetUnionCardPropagator`].
#[derive(Debug)]
pub(crate) struct SetUnionPropagator {
    sets: Box<[SetVar]>,
    union: SetVar,
}

impl SetUnionPropagator {
    pub(crate) fn new(sets: Box<[SetVar]>, union: SetVar) -> Self {
        SetUnionPropagator { sets, union }
    }
}

impl Propagator for SetUnionPropagator {
    fn name(&self) -> &str {
        "SetUnion"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        for &set in self.sets.iter() {
            context.register_set(set, SetDomainEvents::MEMBERSHIP);
        }
        context.register_set(self.union, SetDomainEvents::MEMBERSHIP);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        for &set in self.sets.iter() {
            for value in context.env(set).to_vec() {
                if !context.env_contains(self.union, value) {
                    context.env_remove(set, value)?;
                }
            }
            for value in context.ker(set).to_vec() {
                context.ker_add(self.union, value)?;
            }
        }

        for value in context.env(self.union).to_vec() {
            let suppliers: Vec<SetVar> = self
                .sets
                .iter()
                .copied()
                .filter(|&set| context.env_contains(set, value))
                .collect();
            if suppliers.is_empty() {
                context.env_remove(self.union, value)?;
            } else if suppliers.len() == 1 && context.ker_contains(self.union, value) {
                context.ker_add(suppliers[0], value)?;
            }
        }
        Ok(())
    }
}

/// Cardinality reasoning for the union: `|union|` is at most the sum of the
/// operand cardinalities and at least the largest of them, and each operand
/// must cover what the others cannot. Bound-consistent on the cardinalities.
#[derive(Debug)]
pub(crate) struct SetUnionCardPropagator {
    sets: Box<[SetVar]>,
    union: SetVar,
}

impl SetUnionCardPropagator {
    pub(crate) fn new(sets: Box<[SetVar]>, union: SetVar) -> Self {
        SetUnionCardPropagator { sets, union }
    }
}

impl Propagator for SetUnionCardPropagator {
    fn name(&self) -> &str {
        "SetUnionCard"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        for &set in self.sets.iter() {
            context.register_set(set, SetDomainEvents::CARD);
        }
        context.register_set(self.union, SetDomainEvents::CARD);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        let total_high: i64 = self
            .sets
            .iter()
            .map(|&set| context.card_upper_bound(set) as i64)
            .sum();
        let largest_low = self
            .sets
            .iter()
            .map(|&set| context.card_lower_bound(set))
            .max()
            .unwrap_or(0);

        context.set_card_upper_bound(self.union, total_high.min(i32::MAX as i64) as i32)?;
        context.set_card_lower_bound(self.union, largest_low)?;

        let union_low = context.card_lower_bound(self.union) as i64;
        let union_high = context.card_upper_bound(self.union);
        for &set in self.sets.iter() {
            context.set_card_upper_bound(set, union_high)?;
            let others_high = total_high - context.card_upper_bound(set) as i64;
            let needed = union_low - others_high;
            if needed > 0 {
                context.set_card_lower_bound(set, needed.min(i32::MAX as i64) as i32)?;
            }
        }
        Ok(())
    }
}
