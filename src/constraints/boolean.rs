use super::Constraint;
use crate::propagators::boolean::AndPropagator;
use crate::propagators::boolean::AtMostOnePropagator;
use crate::propagators::boolean::ExactlyOnePropagator;
use crate::propagators::boolean::OrPropagator;
use crate::propagators::reify::ReifyEqualPropagator;
use crate::propagators::reify::ReifyNotEqualPropagator;
use crate::variables::BoolVar;
use crate::variables::IntVar;
use crate::ConstraintOperationError;
use crate::Solver;

fn non_empty(
    bools: Box<[BoolVar]>,
    build: fn(Box<[BoolVar]>) -> Box<dyn crate::engine::cp::propagation::Propagator>,
) -> impl Constraint {
    BoolBlock { bools, build }
}

struct BoolBlock {
    bools: Box<[BoolVar]>,
    build: fn(Box<[BoolVar]>) -> Box<dyn crate::engine::cp::propagation::Propagator>,
}

impl Constraint for BoolBlock {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.bools.is_empty() {
            return Err(ConstraintOperationError::InvalidArgument(
                "a boolean constraint requires at least one operand",
            ));
        }
        solver.add_propagator((self.build)(self.bools))
    }
}

/// Creates the constraint that every operand is true.
pub fn and(bools: impl Into<Box<[BoolVar]>>) -> impl Constraint {
    non_empty(bools.into(), |bools| Box::new(AndPropagator::new(bools)))
}

/// Creates the constraint that at least one operand is true.
pub fn or(bools: impl Into<Box<[BoolVar]>>) -> impl Constraint {
    non_empty(bools.into(), |bools| Box::new(OrPropagator::new(bools)))
}

/// Creates the constraint that exactly one operand is true.
pub fn one(bools: impl Into<Box<[BoolVar]>>) -> impl Constraint {
    non_empty(bools.into(), |bools| {
        Box::new(ExactlyOnePropagator::new(bools))
    })
}

/// Creates the constraint that at most one operand is true.
pub fn lone(bools: impl Into<Box<[BoolVar]>>) -> impl Constraint {
    non_empty(bools.into(), |bools| {
        Box::new(AtMostOnePropagator::new(bools))
    })
}

/// Creates the constraint `literal ⟺ var = value`.
pub fn reify_equal(literal: BoolVar, var: IntVar, value: i32) -> impl Constraint {
    ReifyEqualPropagator::new(literal, var, value)
}

/// Creates the constraint `literal ⟺ var ≠ value`.
pub fn reify_not_equal(literal: BoolVar, var: IntVar, value: i32) -> impl Constraint {
    ReifyNotEqualPropagator::new(literal, var, value)
}
