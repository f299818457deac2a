use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::SetVar;

/// Propagator for the relational join `to = ⋃ { children[i] | i ∈ take }`.
///
/// Selected children flow their kernels into `to`, `to`'s envelope is the
/// union of the envelopes of possibly-selected children, an index whose
/// child would contribute a forbidden element is deselected, and a needed
/// element with a single possible supplier forces that supplier. Cardinality
/// reasoning is left to the dedicated card propagators; membership reasoning
/// here is bound-consistent, not arc-consistent, on `take`.
#[derive(Debug)]
pub(crate) struct JoinRelationPropagator {
    take: SetVar,
    children: Box<[SetVar]>,
    to: SetVar,
}

impl JoinRelationPropagator {
    pub(crate) fn new(take: SetVar, children: Box<[SetVar]>, to: SetVar) -> Self {
        JoinRelationPropagator { take, children, to }
    }
}

impl Propagator for JoinRelationPropagator {
    fn name(&self) -> &str {
        "JoinRelation"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        context.register_set(self.take, SetDomainEvents::MEMBERSHIP);
        for &child in self.children.iter() {
            context.register_set(child, SetDomainEvents::MEMBERSHIP);
        }
        context.register_set(self.to, SetDomainEvents::MEMBERSHIP);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        // take ranges over child indices.
        let take_env: Vec<i32> = context.env(self.take).to_vec();
        for index in take_env {
            if index < 0 || index as usize >= self.children.len() {
                context.env_remove(self.take, index)?;
            }
        }

        for index in context.ker(self.take).to_vec() {
            let child = self.children[index as usize];
            for value in context.ker(child).to_vec() {
                context.ker_add(self.to, value)?;
            }
            // A selected child is a subset of the join.
            for value in context.env(child).to_vec() {
                if !context.env_contains(self.to, value) {
                    context.env_remove(child, value)?;
                }
            }
        }

        for index in context.env(self.take).to_vec() {
            if context.ker_contains(self.take, index) {
                continue;
            }
            let child = self.children[index as usize];
            let contributes_forbidden = context
                .ker(child)
                .iter()
                .any(|&value| !context.env_contains(self.to, value));
            if contributes_forbidden {
                context.env_remove(self.take, index)?;
            }
        }

        for value in context.env(self.to).to_vec() {
            let suppliers: Vec<i32> = context
                .env(self.take)
                .iter()
                .copied()
                .filter(|&index| context.env_contains(self.children[index as usize], value))
                .collect();
            if suppliers.is_empty() {
                context.env_remove(self.to, value)?;
            } else if suppliers.len() == 1 && context.ker_contains(self.to, value) {
                let index = suppliers[0];
                context.ker_add(self.take, index)?;
                context.ker_add(self.children[index as usize], value)?;
            }
        }
        Ok(())
    }
}
