pub(crate) mod constraint_satisfaction_solver;
pub(crate) mod cp;
pub(crate) mod test_helper;

mod variable_names;

pub(crate) use constraint_satisfaction_solver::ConstraintSatisfactionSolver;
pub(crate) use variable_names::VariableNames;
