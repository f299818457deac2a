#![cfg(test)]
use crate::engine::test_helper::TestSolver;
use crate::propagators::singleton::SingletonPropagator;

#[test]
fn the_element_and_the_envelope_are_intersected() {
    let mut solver = TestSolver::default();

    let element = solver.new_variable(1, 5);
    let set = solver.new_set_variable(&[2, 3, 9]);

    let _ = solver
        .new_propagator(SingletonPropagator::new(element, set))
        .expect("the element has candidates");

    solver.assert_card_bounds(set, 1, 1);
    solver.assert_bounds(element, 2, 3);
    solver.assert_env(set, &[2, 3]);
}

#[test]
fn fixing_the_element_fixes_the_set() {
    let mut solver = TestSolver::default();

    let element = solver.new_variable(2, 3);
    let set = solver.new_set_variable(&[2, 3]);

    let propagator = solver
        .new_propagator(SingletonPropagator::new(element, set))
        .expect("the element has candidates");

    solver.fix(element, 3);
    solver
        .propagate(propagator)
        .expect("a singleton of a fixed element is consistent");

    solver.assert_set_fixed(set, &[3]);
}

#[test]
fn a_kernel_element_fixes_the_integer() {
    let mut solver = TestSolver::default();

    let element = solver.new_variable(2, 3);
    let set = solver.new_set_variable(&[2, 3]);

    let propagator = solver
        .new_propagator(SingletonPropagator::new(element, set))
        .expect("the element has candidates");

    solver.ker_add(set, 2);
    solver
        .propagate(propagator)
        .expect("the kernel element is a candidate");

    solver.assert_fixed(element, 2);
    solver.assert_set_fixed(set, &[2]);
}

#[test]
fn a_disjoint_element_and_envelope_conflict() {
    let mut solver = TestSolver::default();

    let element = solver.new_variable(1, 1);
    let set = solver.new_set_variable(&[2, 3]);

    let _ = solver
        .new_propagator(SingletonPropagator::new(element, set))
        .expect_err("no candidate is shared");
}
