use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::IntVar;
use crate::variables::SetVar;

/// Propagator for the functional join `to = { refs[i] | i ∈ take }`.
///
/// Unlike [`super::join_relation::JoinRelationPropagator`], each selected
/// index contributes exactly one value (the image of a function), so the
/// per-value support reasoning works on integer domains instead of child
/// envelopes.
#[derive(Debug)]
pub(crate) struct JoinFunctionPropagator {
    take: SetVar,
    refs: Box<[IntVar]>,
    to: SetVar,
}

impl JoinFunctionPropagator {
    pub(crate) fn new(take: SetVar, refs: Box<[IntVar]>, to: SetVar) -> Self {
        JoinFunctionPropagator { take, refs, to }
    }
}

impl Propagator for JoinFunctionPropagator {
    fn name(&self) -> &str {
        "JoinFunction"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        context.register_set(self.take, SetDomainEvents::MEMBERSHIP);
        for &var in self.refs.iter() {
            context.register_int(var, DomainEvents::ANY_INT);
        }
        context.register_set(self.to, SetDomainEvents::MEMBERSHIP);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        for index in context.env(self.take).to_vec() {
            if index < 0 || index as usize >= self.refs.len() {
                context.env_remove(self.take, index)?;
            }
        }

        for index in context.ker(self.take).to_vec() {
            let var = self.refs[index as usize];
            // A selected slot maps into the join.
            for value in context.domain(var).iter().collect::<Vec<i32>>() {
                if !context.env_contains(self.to, value) {
                    context.remove(var, value)?;
                }
            }
            if let Some(value) = context.fixed_value(var) {
                context.ker_add(self.to, value)?;
            }
        }

        for index in context.env(self.take).to_vec() {
            if context.ker_contains(self.take, index) {
                continue;
            }
            let var = self.refs[index as usize];
            let has_image = context
                .domain(var)
                .iter()
                .any(|value| context.env_contains(self.to, value));
            if !has_image {
                context.env_remove(self.take, index)?;
            }
        }

        for value in context.env(self.to).to_vec() {
            let suppliers: Vec<i32> = context
                .env(self.take)
                .iter()
                .copied()
                .filter(|&index| context.contains(self.refs[index as usize], value))
                .collect();
            if suppliers.is_empty() {
                context.env_remove(self.to, value)?;
            } else if suppliers.len() == 1 && context.ker_contains(self.to, value) {
                let index = suppliers[0];
                context.ker_add(self.take, index)?;
                context.fix(self.refs[index as usize], value)?;
            }
        }
        Ok(())
    }
}

/// Cardinality reasoning for the functional join: each selected index
/// contributes at most one value, so `|to| <= |take|`, and with a global
/// cardinality `gc` (each value taken by at most `gc` selected slots)
/// `|to| >= ⌈|take| / gc⌉`.
///
/// Precondition (not runtime-checked): `take`'s cardinality is already
/// constrained; the builder posts this propagator together with the join.
/// Bound-consistent on the cardinalities.
#[derive(Debug)]
pub(crate) struct JoinFunctionCardPropagator {
    take: SetVar,
    refs: Box<[IntVar]>,
    to: SetVar,
    global_cardinality: Option<i32>,
}

impl JoinFunctionCardPropagator {
    pub(crate) fn new(
        take: SetVar,
        refs: Box<[IntVar]>,
        to: SetVar,
        global_cardinality: Option<i32>,
    ) -> Self {
        JoinFunctionCardPropagator {
            take,
            refs,
            to,
            global_cardinality,
        }
    }
}

impl Propagator for JoinFunctionCardPropagator {
    fn name(&self) -> &str {
        "JoinFunctionCard"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        context.register_set(self.take, SetDomainEvents::CARD);
        context.register_set(self.to, SetDomainEvents::CARD);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        let take_low = context.card_lower_bound(self.take) as i64;
        let take_high = context.card_upper_bound(self.take) as i64;

        context.set_card_upper_bound(self.to, take_high.min(i32::MAX as i64) as i32)?;

        let occupancy = match self.global_cardinality {
            Some(gc) => gc as i64,
            None => self.refs.len().max(1) as i64,
        };
        if take_low > 0 {
            let needed = (take_low + occupancy - 1) / occupancy;
            context.set_card_lower_bound(self.to, needed as i32)?;
        }

        // Each distinct value needs at least one selected slot, at most gc.
        context.set_card_lower_bound(self.take, context.card_lower_bound(self.to))?;
        if let Some(gc) = self.global_cardinality {
            let limit = gc as i64 * context.card_upper_bound(self.to) as i64;
            context.set_card_upper_bound(self.take, limit.min(i32::MAX as i64) as i32)?;
        }
        Ok(())
    }
}
