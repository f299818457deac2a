use super::Constraint;
use crate::propagators::join_function::JoinFunctionCardPropagator;
use crate::propagators::join_function::JoinFunctionPropagator;
use crate::propagators::join_injective_relation_card::JoinInjectiveRelationCardPropagator;
use crate::propagators::join_relation::JoinRelationPropagator;
use crate::propagators::select_n::SelectNPropagator;
use crate::variables::BoolVar;
use crate::variables::IntVar;
use crate::variables::SetVar;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the join constraint `to = ⋃ { children[i] | i ∈ take }`.
pub fn join_relation(
    take: SetVar,
    children: impl Into<Box<[SetVar]>>,
    to: SetVar,
) -> impl Constraint {
    JoinRelation {
        take,
        children: children.into(),
        to,
    }
}

struct JoinRelation {
    take: SetVar,
    children: Box<[SetVar]>,
    to: SetVar,
}

impl Constraint for JoinRelation {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.children.is_empty() {
            return Err(ConstraintOperationError::InvalidArgument(
                "a join requires at least one child",
            ));
        }
        solver.add_propagator(Box::new(JoinRelationPropagator::new(
            self.take,
            self.children,
            self.to,
        )))
    }
}

/// Creates the join constraint for pairwise disjoint children, adding the
/// exact cardinality reasoning the disjointness licenses.
pub fn join_injective_relation(
    take: SetVar,
    children: impl Into<Box<[SetVar]>>,
    to: SetVar,
) -> impl Constraint {
    JoinInjectiveRelation {
        take,
        children: children.into(),
        to,
    }
}

struct JoinInjectiveRelation {
    take: SetVar,
    children: Box<[SetVar]>,
    to: SetVar,
}

impl Constraint for JoinInjectiveRelation {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.children.is_empty() {
            return Err(ConstraintOperationError::InvalidArgument(
                "a join requires at least one child",
            ));
        }
        solver.add_propagator(Box::new(JoinRelationPropagator::new(
            self.take,
            self.children.clone(),
            self.to,
        )))?;
        solver.add_propagator(Box::new(JoinInjectiveRelationCardPropagator::new(
            self.take,
            self.children,
            self.to,
        )))
    }
}

/// Creates the functional join constraint `to = { refs[i] | i ∈ take }`,
/// optionally with a global cardinality bounding how many selected slots may
/// map to the same value.
pub fn join_function(
    take: SetVar,
    refs: impl Into<Box<[IntVar]>>,
    to: SetVar,
    global_cardinality: Option<i32>,
) -> impl Constraint {
    JoinFunction {
        take,
        refs: refs.into(),
        to,
        global_cardinality,
    }
}

struct JoinFunction {
    take: SetVar,
    refs: Box<[IntVar]>,
    to: SetVar,
    global_cardinality: Option<i32>,
}

impl Constraint for JoinFunction {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.refs.is_empty() {
            return Err(ConstraintOperationError::InvalidArgument(
                "a functional join requires at least one reference",
            ));
        }
        if matches!(self.global_cardinality, Some(gc) if gc < 1) {
            return Err(ConstraintOperationError::InvalidArgument(
                "the global cardinality must be at least 1",
            ));
        }
        solver.add_propagator(Box::new(JoinFunctionPropagator::new(
            self.take,
            self.refs.clone(),
            self.to,
        )))?;
        solver.add_propagator(Box::new(JoinFunctionCardPropagator::new(
            self.take,
            self.refs,
            self.to,
            self.global_cardinality,
        )))
    }
}

/// Creates the prefix constraint `bools[i] ⟺ i < n`.
pub fn select_n(bools: impl Into<Box<[BoolVar]>>, n: IntVar) -> impl Constraint {
    SelectN {
        bools: bools.into(),
        n,
    }
}

struct SelectN {
    bools: Box<[BoolVar]>,
    n: IntVar,
}

impl Constraint for SelectN {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.bools.is_empty() {
            return Err(ConstraintOperationError::InvalidArgument(
                "a selection requires at least one boolean",
            ));
        }
        solver.add_propagator(Box::new(SelectNPropagator::new(self.bools, self.n)))
    }
}
