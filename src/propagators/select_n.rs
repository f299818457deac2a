use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::BoolVar;
use crate::variables::IntVar;

/// Propagator for the prefix normal form `bools[i] ⟺ i < n`.
///
/// The true block always occupies the lowest indices; the tie-break is
/// strictly index order. This is the symmetry-breaking encoding for "select
/// n out of an interchangeable block", not a generic counting constraint.
/// Consistent on the bounds of `n`; interior holes in `n`'s domain are not
/// exploited.
#[derive(Debug)]
pub(crate) struct SelectNPropagator {
    bools: Box<[BoolVar]>,
    n: IntVar,
}

impl SelectNPropagator {
    pub(crate) fn new(bools: Box<[BoolVar]>, n: IntVar) -> Self {
        SelectNPropagator { bools, n }
    }
}

impl Propagator for SelectNPropagator {
    fn name(&self) -> &str {
        "SelectN"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        for &var in self.bools.iter() {
            context.register_bool(var, DomainEvents::ASSIGN);
        }
        context.register_int(self.n, DomainEvents::BOUNDS);
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        context.set_lower_bound(self.n, 0)?;
        context.set_upper_bound(self.n, self.bools.len() as i32)?;

        for (index, &var) in self.bools.iter().enumerate() {
            if context.is_true(var) {
                context.set_lower_bound(self.n, index as i32 + 1)?;
            } else if context.is_false(var) {
                context.set_upper_bound(self.n, index as i32)?;
            }
        }

        let low = context.lower_bound(self.n);
        let high = context.upper_bound(self.n);
        for (index, &var) in self.bools.iter().enumerate() {
            if (index as i32) < low {
                context.fix_bool(var, true)?;
            } else if index as i32 >= high {
                context.fix_bool(var, false)?;
            }
        }
        Ok(())
    }
}
