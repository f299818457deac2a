use crate::engine::cp::Assignments;
use crate::variables::IntVar;
use crate::variables::SetVar;

/// Read-only view of the current domains offered to a [`super::Brancher`].
#[derive(Debug)]
pub struct SelectionContext<'a> {
    assignments: &'a Assignments,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> Self {
        SelectionContext { assignments }
    }

    pub fn int_variables(&self) -> impl Iterator<Item = IntVar> + '_ {
        (0..self.assignments.num_int_variables()).map(|index| IntVar::new(index as u32))
    }

    pub fn set_variables(&self) -> impl Iterator<Item = SetVar> + '_ {
        (0..self.assignments.num_set_variables()).map(|index| SetVar::new(index as u32))
    }

    pub fn is_fixed(&self, var: IntVar) -> bool {
        self.assignments.domain(var).is_singleton()
    }

    pub fn lower_bound(&self, var: IntVar) -> i32 {
        self.assignments.domain(var).low()
    }

    pub fn domain_values(&self, var: IntVar) -> Vec<i32> {
        self.assignments.domain(var).iter().collect()
    }

    pub fn is_set_fixed(&self, var: SetVar) -> bool {
        self.assignments.is_set_fixed(var)
    }

    /// The envelope values whose membership is still undecided, ascending.
    pub fn undecided_set_values(&self, var: SetVar) -> Vec<i32> {
        let ker = self.assignments.ker(var);
        self.assignments
            .env(var)
            .iter()
            .copied()
            .filter(|value| ker.binary_search(value).is_err())
            .collect()
    }
}
