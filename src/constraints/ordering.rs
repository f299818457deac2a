use super::Constraint;
use crate::propagators::filter_string::FilterStringPropagator;
use crate::propagators::lex_chain_channel::LexChainChannelPropagator;
use crate::propagators::sorted_sets::SortedSetsCardPropagator;
use crate::propagators::sorted_sets::SortedSetsPropagator;
use crate::variables::IntVar;
use crate::variables::SetVar;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the constraint `result[i] = string[sᵢ - offset]`, where
/// `s₀ < s₁ < ...` enumerates `set` and `result` is padded with `-1` past
/// `|set|`.
pub fn filter_string(
    set: SetVar,
    offset: i32,
    string: impl Into<Box<[IntVar]>>,
    result: impl Into<Box<[IntVar]>>,
) -> impl Constraint {
    FilterString {
        set,
        offset,
        string: string.into(),
        result: result.into(),
    }
}

struct FilterString {
    set: SetVar,
    offset: i32,
    string: Box<[IntVar]>,
    result: Box<[IntVar]>,
}

impl Constraint for FilterString {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.string.is_empty() || self.result.is_empty() {
            return Err(ConstraintOperationError::InvalidArgument(
                "a string filter requires a non-empty string and result",
            ));
        }
        solver.add_propagator(Box::new(FilterStringPropagator::new(
            self.set,
            self.offset,
            self.string,
            self.result,
        )))
    }
}

/// Creates the channeling constraint between equal-length strings and their
/// ranks under lexicographic order: `ints[i] < ints[j]` exactly when
/// `strings[i]` precedes `strings[j]`.
pub fn lex_chain_channel(
    strings: impl Into<Box<[Box<[IntVar]>]>>,
    ints: impl Into<Box<[IntVar]>>,
) -> impl Constraint {
    LexChainChannel {
        strings: strings.into(),
        ints: ints.into(),
    }
}

struct LexChainChannel {
    strings: Box<[Box<[IntVar]>]>,
    ints: Box<[IntVar]>,
}

impl Constraint for LexChainChannel {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.strings.is_empty() {
            return Err(ConstraintOperationError::InvalidArgument(
                "a lexicographic channel requires at least one string",
            ));
        }
        if self.strings.len() != self.ints.len() {
            return Err(ConstraintOperationError::InvalidArgument(
                "a lexicographic channel requires one rank per string",
            ));
        }
        let length = self.strings[0].len();
        if self.strings.iter().any(|string| string.len() != length) {
            return Err(ConstraintOperationError::InvalidArgument(
                "the strings of a lexicographic channel must have equal lengths",
            ));
        }
        solver.add_propagator(Box::new(LexChainChannelPropagator::new(
            self.strings,
            self.ints,
        )))
    }
}

/// Creates the constraint that `sets` hold consecutive blocks of positions
/// in index order, starting from position 0.
pub fn sorted_sets(sets: impl Into<Box<[SetVar]>>) -> impl Constraint {
    SortedSets { sets: sets.into() }
}

struct SortedSets {
    sets: Box<[SetVar]>,
}

impl Constraint for SortedSets {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.sets.is_empty() {
            return Err(ConstraintOperationError::InvalidArgument(
                "a sorted chain requires at least one set",
            ));
        }
        solver.add_propagator(Box::new(SortedSetsPropagator::new(self.sets.clone())))?;
        solver.add_propagator(Box::new(SortedSetsCardPropagator::new(self.sets)))
    }
}
