use crate::basic_types::Contradiction;
use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::SetVar;

/// Cardinality reasoning for an *injective* join: distinct indices select
/// pairwise disjoint children, so `|to| = Σ_{i ∈ take} |children[i]|` and the
/// general union counting of the plain join propagator is unnecessary.
///
/// Precondition (not runtime-checked): the children are pairwise disjoint
/// and the cardinalities of `take` and of every child are already
/// constrained by the accompanying propagators. The builder satisfies this
/// by posting the join and this propagator as one constraint.
///
/// Bound-consistent on all cardinalities.
#[derive(Debug)]
pub(crate) struct JoinInjectiveRelationCardPropagator {
    take: SetVar,
    children: Box<[SetVar]>,
    to: SetVar,
}

impl JoinInjectiveRelationCardPropagator {
    pub(crate) fn new(take: SetVar, children: Box<[SetVar]>, to: SetVar) -> Self {
        JoinInjectiveRelationCardPropagator { take, children, to }
    }
}

impl Propagator for JoinInjectiveRelationCardPropagator {
    fn name(&self) -> &str {
        "JoinInjectiveRelationCard"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        context.register_set(self.take, SetDomainEvents::ANY_SET);
        for &child in self.children.iter() {
            context.register_set(child, SetDomainEvents::CARD);
        }
        context.register_set(self.to, SetDomainEvents::CARD);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        let selected: Vec<SetVar> = context
            .ker(self.take)
            .iter()
            .filter(|&&index| index >= 0 && (index as usize) < self.children.len())
            .map(|&index| self.children[index as usize])
            .collect();
        let optional: Vec<SetVar> = context
            .env(self.take)
            .iter()
            .filter(|&&index| {
                index >= 0
                    && (index as usize) < self.children.len()
                    && !context.ker_contains(self.take, index)
            })
            .map(|&index| self.children[index as usize])
            .collect();

        let mandatory_low: i64 = selected
            .iter()
            .map(|&child| context.card_lower_bound(child) as i64)
            .sum();
        let mandatory_high: i64 = selected
            .iter()
            .map(|&child| context.card_upper_bound(child) as i64)
            .sum();

        let mut optional_lows: Vec<i64> = optional
            .iter()
            .map(|&child| context.card_lower_bound(child) as i64)
            .collect();
        let mut optional_highs: Vec<i64> = optional
            .iter()
            .map(|&child| context.card_upper_bound(child) as i64)
            .collect();
        optional_lows.sort_unstable();
        optional_highs.sort_unstable();

        // |take| extra selections beyond the kernel draw from the optional
        // children: the smallest lower bounds for the floor, the largest
        // upper bounds for the ceiling.
        let extra_low =
            (context.card_lower_bound(self.take) as i64 - selected.len() as i64).max(0) as usize;
        let extra_high = ((context.card_upper_bound(self.take) as i64 - selected.len() as i64)
            .max(0) as usize)
            .min(optional.len());

        let to_low: i64 = mandatory_low
            + optional_lows
                .iter()
                .take(extra_low.min(optional_lows.len()))
                .sum::<i64>();
        let to_high: i64 = mandatory_high + optional_highs.iter().rev().take(extra_high).sum::<i64>();

        context.set_card_lower_bound(self.to, to_low.min(i32::MAX as i64) as i32)?;
        context.set_card_upper_bound(self.to, to_high.min(i32::MAX as i64) as i32)?;

        // Reverse direction: bound |take| from |to| and the child extremes.
        let possible: Vec<SetVar> = context
            .env(self.take)
            .iter()
            .filter(|&&index| index >= 0 && (index as usize) < self.children.len())
            .map(|&index| self.children[index as usize])
            .collect();
        if possible.is_empty() {
            return Ok(());
        }
        let max_child_high = possible
            .iter()
            .map(|&child| context.card_upper_bound(child) as i64)
            .max()
            .unwrap_or(0);
        let min_child_low = possible
            .iter()
            .map(|&child| context.card_lower_bound(child) as i64)
            .min()
            .unwrap_or(0);

        let to_card_low = context.card_lower_bound(self.to) as i64;
        if max_child_high == 0 {
            if to_card_low > 0 {
                return Err(Contradiction::Conflict);
            }
        } else {
            let needed = (to_card_low + max_child_high - 1) / max_child_high;
            context.set_card_lower_bound(self.take, needed.min(i32::MAX as i64) as i32)?;
        }
        if min_child_low >= 1 {
            let limit = context.card_upper_bound(self.to) as i64 / min_child_low;
            context.set_card_upper_bound(self.take, limit.min(i32::MAX as i64) as i32)?;
        }
        Ok(())
    }
}
