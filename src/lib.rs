//! Persimmon is a constraint propagation engine for the models produced by
//! compiling feature hierarchies: integer variables over finite domains, set
//! variables with envelope/kernel/cardinality bounds, and a library of
//! relational propagators (joins, channels, unions, lexicographic ordering)
//! glued together by the builders in [`constraints`].
//!
//! The central abstractions are:
//! - [`domains::Domain`], the canonical finite integer domain,
//! - [`variables`], the typed handles into the store,
//! - [`constraints`], the validated constraint builders,
//! - [`Solver`], which owns the store and runs propagation and search.
//!
//! Propagation narrows domains monotonically until a fixpoint is reached or
//! a contradiction is found; a contradiction is an expected outcome of
//! search, not an error. Search itself is a depth-first enumeration driven
//! by a [`branching::Brancher`].

#[doc(hidden)]
pub mod asserts;
pub(crate) mod basic_types;
pub(crate) mod engine;
pub(crate) mod propagators;

mod api;

pub mod branching;
pub mod constraints;
pub mod domains;
pub mod variables;

pub use api::ConstraintOperationError;
pub use api::SolveResult;
pub use api::Solver;
pub use basic_types::Solution;

#[cfg(test)]
mod tests;
