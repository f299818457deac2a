use crate::variables::BoolVar;
use crate::variables::IntVar;
use crate::variables::SetVar;

/// A snapshot of a complete assignment, published when the search reaches a
/// state in which every variable is instantiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    int_values: Box<[i32]>,
    set_values: Box<[Box<[i32]>]>,
}

impl Solution {
    pub(crate) fn new(int_values: Vec<i32>, set_values: Vec<Box<[i32]>>) -> Solution {
        Solution {
            int_values: int_values.into_boxed_slice(),
            set_values: set_values.into_boxed_slice(),
        }
    }

    pub fn int_value(&self, var: IntVar) -> i32 {
        self.int_values[var.index()]
    }

    pub fn bool_value(&self, var: BoolVar) -> bool {
        self.int_values[var.as_int().index()] == 1
    }

    /// The elements of the set, sorted ascending.
    pub fn set_value(&self, var: SetVar) -> &[i32] {
        &self.set_values[var.index()]
    }
}
