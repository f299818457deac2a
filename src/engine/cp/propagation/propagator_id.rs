use std::fmt::Display;
use std::fmt::Formatter;

/// Index of a propagator in the solver's propagator arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PropagatorId(pub(crate) u32);

impl PropagatorId {
    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl Display for PropagatorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "propagator#{}", self.0)
    }
}
