use crate::basic_types::Contradiction;
use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::SetVar;

/// Ordering propagator for a chain of sets holding consecutive blocks of
/// positions: every element of `sets[i]` precedes every element of
/// `sets[i + 1]`, with empty sets skipped.
///
/// Precondition (not runtime-checked): the sets partition a prefix of the
/// position space into blocks in index order. The builder posts this
/// propagator together with [`SortedSetsCardPropagator`], which carries the
/// interval reasoning that the precondition licenses.
#[derive(Debug)]
pub(crate) struct SortedSetsPropagator {
    sets: Box<[SetVar]>,
}

impl SortedSetsPropagator {
    pub(crate) fn new(sets: Box<[SetVar]>) -> Self {
        SortedSetsPropagator { sets }
    }
}

impl Propagator for SortedSetsPropagator {
    fn name(&self) -> &str {
        "SortedSets"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        for &set in self.sets.iter() {
            context.register_set(set, SetDomainEvents::ANY_SET);
        }
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        for pair in 0..self.sets.len().saturating_sub(1) {
            let before = self.sets[pair];
            let after = self.sets[pair + 1];

            // A required earlier set pushes the later one past its smallest
            // possible element.
            if context.card_lower_bound(before) >= 1 {
                if let Some(&lowest) = context.env(before).first() {
                    for value in context.env(after).to_vec() {
                        if value <= lowest {
                            context.env_remove(after, value)?;
                        }
                    }
                }
            }
            if let Some(&highest) = context.ker(before).last() {
                for value in context.env(after).to_vec() {
                    if value <= highest {
                        context.env_remove(after, value)?;
                    }
                }
            }

            // A required element of the later set caps the earlier one.
            if let Some(&lowest_required) = context.ker(after).first() {
                for value in context.env(before).to_vec() {
                    if value >= lowest_required {
                        context.env_remove(before, value)?;
                    }
                }
                if context.card_lower_bound(before) >= 1 {
                    let candidates: Vec<i32> = context
                        .env(before)
                        .iter()
                        .copied()
                        .filter(|&value| value < lowest_required)
                        .collect();
                    match candidates.as_slice() {
                        [] => return Err(Contradiction::Conflict),
                        [only] => context.ker_add(before, *only)?,
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }
}

/// Interval reasoning for the consecutive-blocks chain: with
/// `lo_i = Σ_{j<i} card_lb(sets[j])` and `hi_i = Σ_{j<i} card_ub(sets[j])`,
/// block `i` lives inside `[lo_i, hi_i + card_ub_i - 1]` and certainly
/// covers `[hi_i, lo_i + card_lb_i - 1]`.
///
/// Shares the consecutive-blocks precondition of [`SortedSetsPropagator`].
#[derive(Debug)]
pub(crate) struct SortedSetsCardPropagator {
    sets: Box<[SetVar]>,
}

impl SortedSetsCardPropagator {
    pub(crate) fn new(sets: Box<[SetVar]>) -> Self {
        SortedSetsCardPropagator { sets }
    }
}

impl Propagator for SortedSetsCardPropagator {
    fn name(&self) -> &str {
        "SortedSetsCard"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        for &set in self.sets.iter() {
            context.register_set(set, SetDomainEvents::ANY_SET);
        }
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        let mut start_low: i64 = 0;
        let mut start_high: i64 = 0;
        for &set in self.sets.iter() {
            let card_low = context.card_lower_bound(set) as i64;
            let card_high = context.card_upper_bound(set) as i64;

            let block_low = start_low;
            let block_high = start_high + card_high - 1;
            for value in context.env(set).to_vec() {
                if (value as i64) < block_low || (value as i64) > block_high {
                    context.env_remove(set, value)?;
                }
            }

            // Positions every feasible block layout covers.
            let forced_low = start_high;
            let forced_high = start_low + card_low - 1;
            let mut position = forced_low;
            while position <= forced_high {
                context.ker_add(set, position as i32)?;
                position += 1;
            }

            start_low += context.card_lower_bound(set) as i64;
            start_high += context.card_upper_bound(set) as i64;
        }
        Ok(())
    }
}
