#![cfg(test)]

pub(crate) mod array_to_set;
pub(crate) mod boolean;
pub(crate) mod filter_string;
pub(crate) mod idempotence;
pub(crate) mod join_relation;
pub(crate) mod lex_chain_channel;
pub(crate) mod set_algebra;
pub(crate) mod singleton;
pub(crate) mod sorted_sets;
