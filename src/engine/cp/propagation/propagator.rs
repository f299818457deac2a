use super::PropagationContextMut;
use super::PropagatorInitialisationContext;
use crate::basic_types::PropagationStatus;

/// A narrowing operator over a fixed tuple of variables.
///
/// Implementations must be:
/// - **sound**: never remove a value that participates in some completion
///   that is consistent with the other variables in scope;
/// - **monotonic**: only ever narrow (the store enforces this and the
///   extreme assert level re-checks it);
/// - **idempotent at fixpoint**: a second invocation with unchanged domains
///   performs no writes;
/// - **order-independent**: running the propagators sharing a variable in
///   any order converges to the same fixpoint.
///
/// A propagator is never woken by its own writes: each call must narrow as
/// far as its current view of the domains allows before returning, and it is
/// re-invoked only when another propagator or a search decision changes a
/// watched variable. A propagator may keep private incremental state behind
/// `&mut self`, but the domains read through the context are always
/// authoritative.
///
/// Not every propagator achieves arc consistency; the documented consistency
/// level is part of each implementation's contract.
pub(crate) trait Propagator {
    /// The name of the propagator, used for logging and diagnostics.
    fn name(&self) -> &str;

    /// Called once when the propagator is added to the solver. Registers the
    /// watched variables and their event subscriptions; may detect a
    /// root-level contradiction from the initial domains.
    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus;

    /// Narrows the domains of the variables in scope, or reports a
    /// [`crate::basic_types::Contradiction`].
    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus;
}
