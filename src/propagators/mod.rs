//! The propagator library: incremental narrowing operators for the
//! relational operations produced when compiling a feature model. See
//! [`crate::constraints`] for the builder functions that assemble these into
//! posted constraints.

pub(crate) mod array_to_set;
pub(crate) mod boolean;
pub(crate) mod filter_string;
pub(crate) mod int_channel;
pub(crate) mod join_function;
pub(crate) mod join_injective_relation_card;
pub(crate) mod join_relation;
pub(crate) mod lex_chain_channel;
pub(crate) mod not_member;
pub(crate) mod reify;
pub(crate) mod select_n;
pub(crate) mod set_difference;
pub(crate) mod set_equal;
pub(crate) mod set_not_equal;
pub(crate) mod set_sum;
pub(crate) mod set_union;
pub(crate) mod singleton;
pub(crate) mod sorted_sets;
