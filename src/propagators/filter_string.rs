use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::IntVar;
use crate::variables::SetVar;

/// Propagator for the string filter
/// `result[i] = string[sᵢ - offset]`, where `s₀ < s₁ < ...` enumerates `set`
/// in ascending order and `result[i] = -1` for `i ≥ |set|`.
///
/// The padding channel and the cardinality bounds are maintained eagerly;
/// the positional equalities are channelled once the selection is decided.
/// `-1` is reserved as the padding value and must not occur in `string`.
#[derive(Debug)]
pub(crate) struct FilterStringPropagator {
    set: SetVar,
    offset: i32,
    string: Box<[IntVar]>,
    result: Box<[IntVar]>,
}

impl FilterStringPropagator {
    pub(crate) fn new(
        set: SetVar,
        offset: i32,
        string: Box<[IntVar]>,
        result: Box<[IntVar]>,
    ) -> Self {
        FilterStringPropagator {
            set,
            offset,
            string,
            result,
        }
    }
}

impl Propagator for FilterStringPropagator {
    fn name(&self) -> &str {
        "FilterString"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        context.register_set(self.set, SetDomainEvents::ANY_SET);
        for &var in self.string.iter() {
            context.register_int(var, DomainEvents::ANY_INT);
        }
        for &var in self.result.iter() {
            context.register_int(var, DomainEvents::ANY_INT);
        }
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        // Selected indices must address a slot of the string.
        for value in context.env(self.set).to_vec() {
            let slot = value as i64 - self.offset as i64;
            if slot < 0 || slot >= self.string.len() as i64 {
                context.env_remove(self.set, value)?;
            }
        }
        context.set_card_upper_bound(self.set, self.result.len() as i32)?;

        // Position i carries the padding value exactly when fewer than i + 1
        // indices are selected.
        for (position, &var) in self.result.iter().enumerate() {
            let position = position as i32;
            if position >= context.card_upper_bound(self.set) {
                context.fix(var, -1)?;
            } else if position < context.card_lower_bound(self.set)
                && context.contains(var, -1)
            {
                context.remove(var, -1)?;
            }
            if context.fixed_value(var) == Some(-1) {
                context.set_card_upper_bound(self.set, position)?;
            } else if !context.contains(var, -1) {
                context.set_card_lower_bound(self.set, position + 1)?;
            }
        }

        if context.is_set_fixed(self.set) {
            let selected = context.ker(self.set).to_vec();
            for (position, &value) in selected.iter().enumerate() {
                let slot = self.string[(value - self.offset) as usize];
                let target = self.result[position];
                let slot_domain = context.domain(slot).clone();
                context.intersect(target, &slot_domain)?;
                let target_domain = context.domain(target).clone();
                context.intersect(slot, &target_domain)?;
            }
        }
        Ok(())
    }
}
