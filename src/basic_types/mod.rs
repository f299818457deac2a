mod propagation_status;
mod solution;

pub(crate) use propagation_status::Contradiction;
pub(crate) use propagation_status::PropagationStatus;
pub use solution::Solution;
