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

/// Propagator for `sum = Σ_{v ∈ set} v`.
///
/// Bounds on `sum` come from the kernel total plus the best and worst
/// selections of optional elements that the cardinality still permits. When
/// `sum` is fixed and a single optional element remains, its membership is
/// decided outright.
#[derive(Debug)]
pub(crate) struct SetSumPropagator {
    set: SetVar,
    sum: IntVar,
}

impl SetSumPropagator {
    pub(crate) fn new(set: SetVar, sum: IntVar) -> Self {
        SetSumPropagator { set, sum }
    }
}

impl Propagator for SetSumPropagator {
    fn name(&self) -> &str {
        "SetSum"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        context.register_set(self.set, SetDomainEvents::ANY_SET);
        context.register_int(self.sum, DomainEvents::BOUNDS);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        let ker_total: i64 = context.ker(self.set).iter().map(|&v| v as i64).sum();
        let ker_len = context.ker(self.set).len() as i64;

        let mut candidates: Vec<i64> = context
            .env(self.set)
            .iter()
            .filter(|&&value| !context.ker_contains(self.set, value))
            .map(|&value| value as i64)
            .collect();
        candidates.sort_unstable();

        // The store keeps the cardinality inside [|ker|, |env|], so the
        // extras range is always well formed.
        let extras_low = (context.card_lower_bound(self.set) as i64 - ker_len).max(0) as usize;
        let extras_high =
            ((context.card_upper_bound(self.set) as i64 - ker_len).max(0) as usize)
                .min(candidates.len());

        let mut ascending_prefix = vec![0i64; candidates.len() + 1];
        let mut descending_prefix = vec![0i64; candidates.len() + 1];
        for (position, &value) in candidates.iter().enumerate() {
            ascending_prefix[position + 1] = ascending_prefix[position] + value;
            descending_prefix[position + 1] =
                descending_prefix[position] + candidates[candidates.len() - 1 - position];
        }

        let mut lowest = i64::MAX;
        let mut highest = i64::MIN;
        for extras in extras_low..=extras_high {
            lowest = lowest.min(ker_total + ascending_prefix[extras]);
            highest = highest.max(ker_total + descending_prefix[extras]);
        }

        context.set_lower_bound(self.sum, lowest.max(i32::MIN as i64) as i32)?;
        context.set_upper_bound(self.sum, highest.min(i32::MAX as i64) as i32)?;

        if let Some(target) = context.fixed_value(self.sum) {
            if candidates.len() == 1 {
                let candidate = candidates[0];
                let residual = target as i64 - ker_total;
                let can_skip = residual == 0 && extras_low == 0;
                let can_take = residual == candidate && extras_high == 1;
                match (can_take, can_skip) {
                    (true, false) => context.ker_add(self.set, candidate as i32)?,
                    (false, true) => context.env_remove(self.set, candidate as i32)?,
                    (false, false) => return Err(Contradiction::Conflict),
                    (true, true) => {}
                }
            } else if candidates.is_empty() && target as i64 != ker_total {
                return Err(Contradiction::Conflict);
            }
        }
        Ok(())
    }
}
