use crate::domains::Domain;
use crate::domains::EmptyDomain;
use crate::engine::cp::Assignments;
use crate::variables::BoolVar;
use crate::variables::IntVar;
use crate::variables::SetVar;

/// Read access to the current domains, shared by every context handed to a
/// propagator.
pub(crate) trait ReadDomains {
    fn assignments(&self) -> &Assignments;

    fn domain(&self, var: IntVar) -> &Domain {
        self.assignments().domain(var)
    }

    fn lower_bound(&self, var: IntVar) -> i32 {
        self.domain(var).low()
    }

    fn upper_bound(&self, var: IntVar) -> i32 {
        self.domain(var).high()
    }

    fn contains(&self, var: IntVar, value: i32) -> bool {
        self.domain(var).contains(value)
    }

    /// The value of an instantiated variable.
    fn fixed_value(&self, var: IntVar) -> Option<i32> {
        self.domain(var).value()
    }

    fn is_true(&self, var: BoolVar) -> bool {
        self.lower_bound(var.as_int()) == 1
    }

    fn is_false(&self, var: BoolVar) -> bool {
        self.upper_bound(var.as_int()) == 0
    }

    fn env(&self, var: SetVar) -> &[i32] {
        self.assignments().env(var)
    }

    fn ker(&self, var: SetVar) -> &[i32] {
        self.assignments().ker(var)
    }

    fn env_contains(&self, var: SetVar, value: i32) -> bool {
        self.env(var).binary_search(&value).is_ok()
    }

    fn ker_contains(&self, var: SetVar, value: i32) -> bool {
        self.ker(var).binary_search(&value).is_ok()
    }

    fn card_lower_bound(&self, var: SetVar) -> i32 {
        self.assignments().card(var).low()
    }

    fn card_upper_bound(&self, var: SetVar) -> i32 {
        self.assignments().card(var).high()
    }

    /// True when the envelope and kernel coincide (the cardinality is then
    /// fixed by the store's invariant cascade).
    fn is_set_fixed(&self, var: SetVar) -> bool {
        self.assignments().is_set_fixed(var)
    }
}

/// The context handed to [`super::Propagator::propagate`]: read access plus
/// the narrowing operations. Every mutation is committed through
/// [`Assignments`], which records the trail entry and the wake-up event.
#[derive(Debug)]
pub(crate) struct PropagationContextMut<'a> {
    assignments: &'a mut Assignments,
}

impl<'a> PropagationContextMut<'a> {
    pub(crate) fn new(assignments: &'a mut Assignments) -> Self {
        PropagationContextMut { assignments }
    }

    pub(crate) fn set_lower_bound(&mut self, var: IntVar, bound: i32) -> Result<(), EmptyDomain> {
        self.assignments.tighten_lower_bound(var, bound)
    }

    pub(crate) fn set_upper_bound(&mut self, var: IntVar, bound: i32) -> Result<(), EmptyDomain> {
        self.assignments.tighten_upper_bound(var, bound)
    }

    pub(crate) fn remove(&mut self, var: IntVar, value: i32) -> Result<(), EmptyDomain> {
        self.assignments.remove_value(var, value)
    }

    pub(crate) fn fix(&mut self, var: IntVar, value: i32) -> Result<(), EmptyDomain> {
        self.assignments.instantiate(var, value)
    }

    pub(crate) fn intersect(&mut self, var: IntVar, other: &Domain) -> Result<(), EmptyDomain> {
        self.assignments.intersect(var, other)
    }

    pub(crate) fn fix_bool(&mut self, var: BoolVar, value: bool) -> Result<(), EmptyDomain> {
        self.assignments.instantiate(var.as_int(), i32::from(value))
    }

    pub(crate) fn env_remove(&mut self, var: SetVar, value: i32) -> Result<(), EmptyDomain> {
        self.assignments.env_remove(var, value)
    }

    pub(crate) fn ker_add(&mut self, var: SetVar, value: i32) -> Result<(), EmptyDomain> {
        self.assignments.ker_add(var, value)
    }

    pub(crate) fn set_card_lower_bound(
        &mut self,
        var: SetVar,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        self.assignments.tighten_card_lower_bound(var, bound)
    }

    pub(crate) fn set_card_upper_bound(
        &mut self,
        var: SetVar,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        self.assignments.tighten_card_upper_bound(var, bound)
    }
}

impl ReadDomains for PropagationContextMut<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}
