use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::domain_events::SetDomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::IntVar;
use crate::variables::SetVar;

/// Channeling between a partition view and an assignment-function view of
/// the same information: `idx ∈ sets[k] ⟺ ints[idx] = k`.
///
/// Arc-consistent: every removed bucket is mirrored as an envelope removal
/// and vice versa, so either view can drive the search.
#[derive(Debug)]
pub(crate) struct IntChannelPropagator {
    sets: Box<[SetVar]>,
    ints: Box<[IntVar]>,
}

impl IntChannelPropagator {
    pub(crate) fn new(sets: Box<[SetVar]>, ints: Box<[IntVar]>) -> Self {
        IntChannelPropagator { sets, ints }
    }
}

impl Propagator for IntChannelPropagator {
    fn name(&self) -> &str {
        "IntChannel"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        for &set in self.sets.iter() {
            context.register_set(set, SetDomainEvents::MEMBERSHIP);
        }
        for &int in self.ints.iter() {
            context.register_int(int, DomainEvents::ANY_INT);
        }
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        let num_buckets = self.sets.len() as i32;
        let num_indices = self.ints.len() as i32;

        for (index, &int) in self.ints.iter().enumerate() {
            let index = index as i32;
            context.set_lower_bound(int, 0)?;
            context.set_upper_bound(int, num_buckets - 1)?;
            for bucket in 0..num_buckets {
                if !context.env_contains(self.sets[bucket as usize], index)
                    && context.contains(int, bucket)
                {
                    context.remove(int, bucket)?;
                }
            }
            if let Some(bucket) = context.fixed_value(int) {
                context.ker_add(self.sets[bucket as usize], index)?;
                for other in 0..num_buckets {
                    if other != bucket {
                        context.env_remove(self.sets[other as usize], index)?;
                    }
                }
            }
        }

        for (bucket, &set) in self.sets.iter().enumerate() {
            let bucket = bucket as i32;
            for index in context.env(set).to_vec() {
                if index < 0 || index >= num_indices {
                    context.env_remove(set, index)?;
                    continue;
                }
                if !context.contains(self.ints[index as usize], bucket) {
                    context.env_remove(set, index)?;
                }
            }
            for index in context.ker(set).to_vec() {
                context.fix(self.ints[index as usize], bucket)?;
            }
        }
        Ok(())
    }
}
