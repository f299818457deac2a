//! The constraint builders: the surface through which a compiled model is
//! posted to the [`Solver`].
//!
//! Each builder validates its operands and returns an opaque [`Constraint`]
//! which is staged via [`Solver::add_constraint`] and added by
//! [`ConstraintPoster::post`]. A constraint may expand into several
//! propagators; the builder keeps the bundle together so the preconditions
//! the individual propagators rely on are always established as a unit.
//!
//! ```
//! # use persimmon::Solver;
//! # use persimmon::constraints;
//! let mut solver = Solver::new();
//! let element = solver.new_bounded_variable(1, 3);
//! let set = solver.new_set_variable(&[1, 2, 3]);
//! solver
//!     .add_constraint(constraints::singleton(element, set))
//!     .post()
//!     .expect("the operands are well formed");
//! ```

mod boolean;
mod constraint_poster;
mod ordering;
mod relational;
mod set_ops;

pub use boolean::*;
pub use constraint_poster::ConstraintPoster;
pub use ordering::*;
pub use relational::*;
pub use set_ops::*;

use crate::engine::cp::propagation::Propagator;
use crate::ConstraintOperationError;
use crate::Solver;

/// A relation over variables, enforced by one or more propagators once
/// posted.
pub trait Constraint {
    /// Add the constraint to the solver.
    ///
    /// Returns [`ConstraintOperationError::InvalidArgument`] when the
    /// operands are malformed and
    /// [`ConstraintOperationError::RootLevelConflict`] when the constraint
    /// makes the model inconsistent before any search.
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}

impl<ConcretePropagator> Constraint for ConcretePropagator
where
    ConcretePropagator: Propagator + 'static,
{
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        solver.add_propagator(Box::new(self))
    }
}

impl<C: Constraint> Constraint for Vec<C> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.into_iter()
            .try_for_each(|constraint| constraint.post(solver))
    }
}
