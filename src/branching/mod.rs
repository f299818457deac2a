//! Variable/value selection for the depth-first search. A [`Brancher`]
//! proposes one binary [`Decision`] per search node; the solver tries the
//! inclusion branch first and the exclusion branch on backtracking.

mod in_order;
mod random;
mod selection_context;

pub use in_order::InOrderBrancher;
pub use random::RandomBrancher;
pub use selection_context::SelectionContext;

use crate::variables::IntVar;
use crate::variables::SetVar;

/// A binary search decision. The solver applies the positive form
/// (`var = value` / `value ∈ var`) on the left branch and the negative form
/// (`var != value` / `value ∉ var`) on the right branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Int { var: IntVar, value: i32 },
    SetElement { var: SetVar, value: i32 },
}

pub trait Brancher {
    /// Proposes the next decision, or `None` when every variable is
    /// instantiated.
    fn next_decision(&mut self, context: &SelectionContext<'_>) -> Option<Decision>;
}
