//! Handles to the variables stored by the engine. Variables live in parallel
//! arenas inside [`crate::engine::cp::Assignments`] and are addressed by
//! stable indices; the handles are plain `Copy` newtypes so that propagators
//! can hold their scope without back-pointers into the engine.

use std::fmt::Display;
use std::fmt::Formatter;

/// An integer variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntVar {
    pub(crate) index: u32,
}

impl IntVar {
    pub(crate) fn new(index: u32) -> IntVar {
        IntVar { index }
    }

    pub(crate) fn index(&self) -> usize {
        self.index as usize
    }
}

/// A set variable: an envelope/kernel/cardinality triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SetVar {
    pub(crate) index: u32,
}

impl SetVar {
    pub(crate) fn new(index: u32) -> SetVar {
        SetVar { index }
    }

    pub(crate) fn index(&self) -> usize {
        self.index as usize
    }
}

/// A boolean variable: an [`IntVar`] over `{0, 1}` where `1` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoolVar {
    pub(crate) inner: IntVar,
}

impl BoolVar {
    pub(crate) fn new(inner: IntVar) -> BoolVar {
        BoolVar { inner }
    }

    /// The underlying integer variable.
    pub fn as_int(&self) -> IntVar {
        self.inner
    }
}

impl Display for IntVar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "int{}", self.index)
    }
}

impl Display for SetVar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "set{}", self.index)
    }
}

impl Display for BoolVar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "bool{}", self.inner.index)
    }
}
