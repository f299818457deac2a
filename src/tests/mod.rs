#![cfg(test)]

pub(crate) mod propagators;
