pub(crate) mod propagation_context;
pub(crate) mod propagator;
pub(crate) mod propagator_id;
pub(crate) mod propagator_initialisation_context;

pub(crate) use propagation_context::PropagationContextMut;
pub(crate) use propagation_context::ReadDomains;
pub(crate) use propagator::Propagator;
pub(crate) use propagator_id::PropagatorId;
pub(crate) use propagator_initialisation_context::PropagatorInitialisationContext;
