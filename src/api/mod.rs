//! The public solver facade. Variables are created here, constraints are
//! posted through [`crate::constraints`], and solutions are read back as
//! [`Solution`] snapshots.

use thiserror::Error;

use crate::basic_types::Solution;
use crate::branching::Brancher;
use crate::constraints::Constraint;
use crate::constraints::ConstraintPoster;
use crate::domains::Domain;
use crate::engine::cp::propagation::Propagator;
use crate::engine::ConstraintSatisfactionSolver;
use crate::variables::BoolVar;
use crate::variables::IntVar;
use crate::variables::SetVar;

/// An error raised while adding a constraint to the [`Solver`]. Both
/// variants are reported before any search takes place; a contradiction
/// found during search is never surfaced through this type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// The operands handed to a constraint builder are malformed, e.g.
    /// mismatched array lengths or an empty operand list. A programmer or
    /// model error, detected before any propagator runs.
    #[error("invalid constraint operands: {0}")]
    InvalidArgument(&'static str),
    /// Adding the constraint made the model inconsistent at the root level;
    /// no instance exists under the given scope.
    #[error("the constraint is inconsistent at the root level")]
    RootLevelConflict,
}

/// The outcome of [`Solver::satisfy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    Satisfiable(Solution),
    Unsatisfiable,
}

/// A solver instance: owns the variable store, the registered propagators
/// and the search machinery.
#[derive(Debug, Default)]
pub struct Solver {
    internal: ConstraintSatisfactionSolver,
}

impl Solver {
    pub fn new() -> Solver {
        Solver::default()
    }

    /// Creates an integer variable with the contiguous domain
    /// `{low, ..., high}`.
    pub fn new_bounded_variable(&mut self, low: i32, high: i32) -> IntVar {
        self.internal.new_int_variable(Domain::bounded(low, high), None)
    }

    pub fn new_bounded_variable_named(
        &mut self,
        low: i32,
        high: i32,
        name: impl Into<String>,
    ) -> IntVar {
        self.internal
            .new_int_variable(Domain::bounded(low, high), Some(name.into()))
    }

    /// Creates an integer variable over an explicit value set.
    pub fn new_enumerated_variable(&mut self, values: &[i32]) -> IntVar {
        self.internal
            .new_int_variable(Domain::enumerated(values.to_vec()), None)
    }

    pub fn new_boolean_variable(&mut self) -> BoolVar {
        BoolVar::new(self.new_bounded_variable(0, 1))
    }

    pub fn new_boolean_variable_named(&mut self, name: impl Into<String>) -> BoolVar {
        BoolVar::new(self.new_bounded_variable_named(0, 1, name))
    }

    /// Creates a set variable with the given envelope, an empty kernel and
    /// cardinality bounds `[0, |env|]`.
    pub fn new_set_variable(&mut self, values: &[i32]) -> SetVar {
        let high = values.len() as i32;
        self.internal
            .new_set_variable(values, Domain::bounded(0, high.max(0)), None)
    }

    pub fn new_set_variable_named(&mut self, values: &[i32], name: impl Into<String>) -> SetVar {
        let high = values.len() as i32;
        self.internal
            .new_set_variable(values, Domain::bounded(0, high.max(0)), Some(name.into()))
    }

    /// Creates a set variable with explicit cardinality bounds, e.g. from
    /// declared scope bounds of the compiled model.
    pub fn new_set_variable_with_card(
        &mut self,
        values: &[i32],
        card_low: i32,
        card_high: i32,
    ) -> SetVar {
        self.internal
            .new_set_variable(values, Domain::bounded(card_low, card_high), None)
    }

    /// Stages a constraint for posting; see [`crate::constraints`] for the
    /// available builders.
    pub fn add_constraint<ConstraintImpl: Constraint>(
        &mut self,
        constraint: ConstraintImpl,
    ) -> ConstraintPoster<'_, ConstraintImpl> {
        ConstraintPoster::new(self, constraint)
    }

    pub(crate) fn add_propagator(
        &mut self,
        propagator: Box<dyn Propagator>,
    ) -> Result<(), ConstraintOperationError> {
        self.internal.add_propagator(propagator)
    }

    /// Searches for one instance.
    pub fn satisfy(&mut self, brancher: &mut impl Brancher) -> SolveResult {
        let mut first = None;
        self.internal.solve(brancher, &mut |solution| {
            first = Some(solution.clone());
            false
        });
        match first {
            Some(solution) => SolveResult::Satisfiable(solution),
            None => SolveResult::Unsatisfiable,
        }
    }

    /// Enumerates every instance, invoking `on_solution` for each; returns
    /// the number of solutions found.
    pub fn enumerate(
        &mut self,
        brancher: &mut impl Brancher,
        mut on_solution: impl FnMut(&Solution),
    ) -> u64 {
        let mut count = 0;
        self.internal.solve(brancher, &mut |solution| {
            count += 1;
            on_solution(solution);
            true
        });
        count
    }

    /// The number of instances without materialising them.
    pub fn count_solutions(&mut self, brancher: &mut impl Brancher) -> u64 {
        self.enumerate(brancher, |_| {})
    }
}
