#![cfg(any(test, doc))]
//! This module exposes helpers that aid testing of propagators. The
//! [`TestSolver`] allows setting up specific scenarios under which to test
//! the various operations of a propagator, without involving the search.

use std::fmt::Debug;
use std::fmt::Formatter;

use crate::basic_types::Contradiction;
use crate::basic_types::PropagationStatus;
use crate::domains::Domain;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorId;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::Assignments;
use crate::engine::cp::WatchListCP;
use crate::variables::BoolVar;
use crate::variables::IntVar;
use crate::variables::SetVar;

/// A container for variables and propagators, which can be used to test
/// propagators in isolation.
#[derive(Default)]
pub(crate) struct TestSolver {
    pub(crate) assignments: Assignments,
    pub(crate) watch_list: WatchListCP,
    propagators: Vec<Box<dyn Propagator>>,
}

impl Debug for TestSolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSolver")
            .field("assignments", &self.assignments)
            .field("num_propagators", &self.propagators.len())
            .finish()
    }
}

impl TestSolver {
    pub(crate) fn new_variable(&mut self, lower_bound: i32, upper_bound: i32) -> IntVar {
        self.watch_list.grow_int();
        self.assignments
            .new_int_variable(Domain::bounded(lower_bound, upper_bound))
    }

    pub(crate) fn new_sparse_variable(&mut self, values: &[i32]) -> IntVar {
        assert!(
            !values.is_empty(),
            "cannot create a variable with an empty domain"
        );
        self.watch_list.grow_int();
        self.assignments
            .new_int_variable(Domain::enumerated(values.to_vec()))
    }

    pub(crate) fn new_boolean(&mut self) -> BoolVar {
        BoolVar::new(self.new_variable(0, 1))
    }

    pub(crate) fn new_set_variable(&mut self, values: &[i32]) -> SetVar {
        let high = values.len() as i32;
        self.new_set_variable_with_card(values, 0, high)
    }

    pub(crate) fn new_set_variable_with_card(
        &mut self,
        values: &[i32],
        card_low: i32,
        card_high: i32,
    ) -> SetVar {
        self.watch_list.grow_set();
        self.assignments
            .new_set_variable(values, Domain::bounded(card_low, card_high))
    }

    pub(crate) fn new_propagator(
        &mut self,
        propagator: impl Propagator + 'static,
    ) -> Result<PropagatorId, Contradiction> {
        let id = PropagatorId(self.propagators.len() as u32);

        let mut propagator: Box<dyn Propagator> = Box::new(propagator);
        propagator.initialise_at_root(&mut PropagatorInitialisationContext::new(
            &self.assignments,
            &mut self.watch_list,
            id,
        ))?;
        self.propagators.push(propagator);

        self.propagate(id)?;
        Ok(id)
    }

    pub(crate) fn propagate(&mut self, propagator: PropagatorId) -> PropagationStatus {
        let mut context = PropagationContextMut::new(&mut self.assignments);
        self.propagators[propagator.index()].propagate(&mut context)
    }

    /// Re-runs every registered propagator until a full pass changes
    /// nothing. The events are drained, not dispatched; the test solver has
    /// no propagation queue.
    pub(crate) fn propagate_until_fixed_point(&mut self) -> PropagationStatus {
        loop {
            let _ = self.assignments.drain_events();
            for index in 0..self.propagators.len() {
                self.propagate(PropagatorId(index as u32))?;
            }
            if self.assignments.drain_events().is_empty() {
                return Ok(());
            }
        }
    }

    pub(crate) fn lower_bound(&self, var: IntVar) -> i32 {
        self.assignments.domain(var).low()
    }

    pub(crate) fn upper_bound(&self, var: IntVar) -> i32 {
        self.assignments.domain(var).high()
    }

    pub(crate) fn is_true(&self, var: BoolVar) -> bool {
        self.lower_bound(var.as_int()) == 1
    }

    pub(crate) fn is_false(&self, var: BoolVar) -> bool {
        self.upper_bound(var.as_int()) == 0
    }

    pub(crate) fn env(&self, var: SetVar) -> Vec<i32> {
        self.assignments.env(var).to_vec()
    }

    pub(crate) fn ker(&self, var: SetVar) -> Vec<i32> {
        self.assignments.ker(var).to_vec()
    }

    pub(crate) fn card_bounds(&self, var: SetVar) -> (i32, i32) {
        let card = self.assignments.card(var);
        (card.low(), card.high())
    }

    pub(crate) fn increase_lower_bound(&mut self, var: IntVar, bound: i32) {
        let result = self.assignments.tighten_lower_bound(var, bound);
        assert!(
            result.is_ok(),
            "tightening the lower bound in the test setup emptied the domain"
        );
    }

    pub(crate) fn decrease_upper_bound(&mut self, var: IntVar, bound: i32) {
        let result = self.assignments.tighten_upper_bound(var, bound);
        assert!(
            result.is_ok(),
            "tightening the upper bound in the test setup emptied the domain"
        );
    }

    pub(crate) fn remove(&mut self, var: IntVar, value: i32) {
        let result = self.assignments.remove_value(var, value);
        assert!(
            result.is_ok(),
            "removing a value in the test setup emptied the domain"
        );
    }

    pub(crate) fn fix(&mut self, var: IntVar, value: i32) {
        let result = self.assignments.instantiate(var, value);
        assert!(
            result.is_ok(),
            "instantiating a variable in the test setup emptied the domain"
        );
    }

    pub(crate) fn set_boolean(&mut self, var: BoolVar, value: bool) {
        self.fix(var.as_int(), i32::from(value));
    }

    pub(crate) fn env_remove(&mut self, var: SetVar, value: i32) {
        let result = self.assignments.env_remove(var, value);
        assert!(
            result.is_ok(),
            "removing an envelope value in the test setup contradicted the kernel"
        );
    }

    pub(crate) fn ker_add(&mut self, var: SetVar, value: i32) {
        let result = self.assignments.ker_add(var, value);
        assert!(
            result.is_ok(),
            "adding a kernel value in the test setup fell outside the envelope"
        );
    }

    pub(crate) fn set_card_bounds(&mut self, var: SetVar, low: i32, high: i32) {
        let lower = self.assignments.tighten_card_lower_bound(var, low);
        let upper = self.assignments.tighten_card_upper_bound(var, high);
        assert!(
            lower.is_ok() && upper.is_ok(),
            "tightening the cardinality in the test setup emptied the domain"
        );
    }

    pub(crate) fn assert_bounds(&self, var: IntVar, low: i32, high: i32) {
        let actual_low = self.lower_bound(var);
        let actual_high = self.upper_bound(var);

        assert_eq!(
            (low, high),
            (actual_low, actual_high),
            "expected the bounds [{low}, {high}] but the variable has the bounds [{actual_low}, {actual_high}]"
        );
    }

    pub(crate) fn assert_domain(&self, var: IntVar, domain: &[i32]) {
        assert!(
            !domain.is_empty(),
            "domain provided to the test solver is empty"
        );
        let actual: Vec<i32> = self.assignments.domain(var).iter().collect();
        assert_eq!(
            domain, actual,
            "expected the domain {domain:?} but the variable has the domain {actual:?}"
        );
    }

    pub(crate) fn assert_fixed(&self, var: IntVar, value: i32) {
        self.assert_bounds(var, value, value);
    }

    pub(crate) fn assert_env(&self, var: SetVar, values: &[i32]) {
        let actual = self.env(var);
        assert_eq!(
            values, actual,
            "expected the envelope {values:?} but the variable has the envelope {actual:?}"
        );
    }

    pub(crate) fn assert_ker(&self, var: SetVar, values: &[i32]) {
        let actual = self.ker(var);
        assert_eq!(
            values, actual,
            "expected the kernel {values:?} but the variable has the kernel {actual:?}"
        );
    }

    pub(crate) fn assert_card_bounds(&self, var: SetVar, low: i32, high: i32) {
        let (actual_low, actual_high) = self.card_bounds(var);
        assert_eq!(
            (low, high),
            (actual_low, actual_high),
            "expected the cardinality [{low}, {high}] but the variable has the cardinality [{actual_low}, {actual_high}]"
        );
    }

    pub(crate) fn assert_set_fixed(&self, var: SetVar, values: &[i32]) {
        assert!(
            self.assignments.is_set_fixed(var),
            "the set variable is not fixed"
        );
        self.assert_ker(var, values);
    }
}
