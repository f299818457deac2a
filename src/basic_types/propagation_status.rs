use crate::domains::EmptyDomain;

/// The result of invoking a propagator. Propagation either succeeds, having
/// possibly narrowed some domains, or identifies a contradiction in the
/// current assignment. A contradiction is an expected search event handled by
/// backtracking, not an error.
pub(crate) type PropagationStatus = Result<(), Contradiction>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contradiction {
    /// A domain was narrowed to the empty set.
    EmptyDomain,
    /// The propagator detected that its constraint cannot be satisfied even
    /// though no individual domain is empty (e.g. two instantiated sets that
    /// are required to differ turned out equal).
    Conflict,
}

impl From<EmptyDomain> for Contradiction {
    fn from(_: EmptyDomain) -> Contradiction {
        Contradiction::EmptyDomain
    }
}
