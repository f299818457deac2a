use super::Constraint;
use crate::propagators::array_to_set::ArrayToSetCardPropagator;
use crate::propagators::array_to_set::ArrayToSetPropagator;
use crate::propagators::int_channel::IntChannelPropagator;
use crate::propagators::not_member::NotMemberPropagator;
use crate::propagators::set_difference::SetDifferencePropagator;
use crate::propagators::set_equal::SetEqualPropagator;
use crate::propagators::set_not_equal::SetNotEqualConstantPropagator;
use crate::propagators::set_not_equal::SetNotEqualPropagator;
use crate::propagators::set_sum::SetSumPropagator;
use crate::propagators::set_union::SetUnionCardPropagator;
use crate::propagators::set_union::SetUnionPropagator;
use crate::propagators::singleton::SingletonPropagator;
use crate::variables::IntVar;
use crate::variables::SetVar;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the constraint `set = {element}`.
pub fn singleton(element: IntVar, set: SetVar) -> impl Constraint {
    SingletonPropagator::new(element, set)
}

/// Creates the constraint `left = right` over two set variables.
pub fn equal(left: SetVar, right: SetVar) -> impl Constraint {
    SetEqualPropagator::new(left, right)
}

/// Creates the constraint `left ≠ right` over two set variables.
pub fn not_equal(left: SetVar, right: SetVar) -> impl Constraint {
    SetNotEqualPropagator::new(left, right)
}

/// Creates the constraint `set ≠ constant`. The constant is normalised, so
/// it may be handed over unsorted and with duplicates.
pub fn not_equal_constant(set: SetVar, constant: impl Into<Box<[i32]>>) -> impl Constraint {
    let mut constant = constant.into().into_vec();
    constant.sort_unstable();
    constant.dedup();
    SetNotEqualConstantPropagator::new(set, constant.into_boxed_slice())
}

/// Creates the constraint `difference = minuend \ subtrahend`.
pub fn difference(minuend: SetVar, subtrahend: SetVar, difference: SetVar) -> impl Constraint {
    SetDifferencePropagator::new(minuend, subtrahend, difference)
}

/// Creates the constraint `union = operands[0] ∪ ... ∪ operands[k-1]`.
pub fn union(operands: impl Into<Box<[SetVar]>>, union: SetVar) -> impl Constraint {
    Union {
        operands: operands.into(),
        union,
    }
}

struct Union {
    operands: Box<[SetVar]>,
    union: SetVar,
}

impl Constraint for Union {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.operands.is_empty() {
            return Err(ConstraintOperationError::InvalidArgument(
                "a union requires at least one operand",
            ));
        }
        solver.add_propagator(Box::new(SetUnionPropagator::new(
            self.operands.clone(),
            self.union,
        )))?;
        solver.add_propagator(Box::new(SetUnionCardPropagator::new(
            self.operands,
            self.union,
        )))
    }
}

/// Creates the constraint `sum = Σ_{v ∈ set} v`.
pub fn set_sum(set: SetVar, sum: IntVar) -> impl Constraint {
    SetSumPropagator::new(set, sum)
}

/// Creates the constraint `element ∉ set`.
pub fn not_member(element: IntVar, set: SetVar) -> impl Constraint {
    NotMemberPropagator::new(element, set)
}

/// Creates the channeling constraint `idx ∈ sets[k] ⟺ ints[idx] = k`.
pub fn int_channel(
    sets: impl Into<Box<[SetVar]>>,
    ints: impl Into<Box<[IntVar]>>,
) -> impl Constraint {
    IntChannel {
        sets: sets.into(),
        ints: ints.into(),
    }
}

struct IntChannel {
    sets: Box<[SetVar]>,
    ints: Box<[IntVar]>,
}

impl Constraint for IntChannel {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.sets.is_empty() || self.ints.is_empty() {
            return Err(ConstraintOperationError::InvalidArgument(
                "a channel requires at least one set and one integer",
            ));
        }
        solver.add_propagator(Box::new(IntChannelPropagator::new(self.sets, self.ints)))
    }
}

/// Creates the constraint `set = { array[0], ..., array[k-1] }`, optionally
/// with a global cardinality bounding how often a single value may occur in
/// the array.
pub fn array_to_set(
    array: impl Into<Box<[IntVar]>>,
    set: SetVar,
    global_cardinality: Option<i32>,
) -> impl Constraint {
    ArrayToSet {
        array: array.into(),
        set,
        global_cardinality,
    }
}

struct ArrayToSet {
    array: Box<[IntVar]>,
    set: SetVar,
    global_cardinality: Option<i32>,
}

impl Constraint for ArrayToSet {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.array.is_empty() {
            return Err(ConstraintOperationError::InvalidArgument(
                "an array-to-set constraint requires at least one array entry",
            ));
        }
        if matches!(self.global_cardinality, Some(gc) if gc < 1) {
            return Err(ConstraintOperationError::InvalidArgument(
                "the global cardinality must be at least 1",
            ));
        }
        solver.add_propagator(Box::new(ArrayToSetPropagator::new(
            self.array.clone(),
            self.set,
        )))?;
        solver.add_propagator(Box::new(ArrayToSetCardPropagator::new(
            self.array,
            self.set,
            self.global_cardinality,
        )))
    }
}
