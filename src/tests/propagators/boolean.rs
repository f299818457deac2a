#![cfg(test)]
use crate::engine::test_helper::TestSolver;
use crate::propagators::boolean::AndPropagator;
use crate::propagators::boolean::AtMostOnePropagator;
use crate::propagators::boolean::ExactlyOnePropagator;
use crate::propagators::boolean::OrPropagator;
use crate::propagators::reify::ReifyEqualPropagator;
use crate::propagators::reify::ReifyNotEqualPropagator;

#[test]
fn and_fixes_every_operand() {
    let mut solver = TestSolver::default();

    let bools: Vec<_> = (0..3).map(|_| solver.new_boolean()).collect();

    let _ = solver
        .new_propagator(AndPropagator::new(bools.clone().into_boxed_slice()))
        .expect("nothing is decided yet");

    assert!(bools.iter().all(|&var| solver.is_true(var)));
}

#[test]
fn and_conflicts_with_a_false_operand() {
    let mut solver = TestSolver::default();

    let bools: Vec<_> = (0..2).map(|_| solver.new_boolean()).collect();
    solver.set_boolean(bools[1], false);

    let _ = solver
        .new_propagator(AndPropagator::new(bools.into_boxed_slice()))
        .expect_err("a false operand breaks the conjunction");
}

#[test]
fn or_fixes_the_last_undecided_operand() {
    let mut solver = TestSolver::default();

    let bools: Vec<_> = (0..3).map(|_| solver.new_boolean()).collect();

    let propagator = solver
        .new_propagator(OrPropagator::new(bools.clone().into_boxed_slice()))
        .expect("nothing is decided yet");

    solver.set_boolean(bools[0], false);
    solver.set_boolean(bools[2], false);
    solver
        .propagate(propagator)
        .expect("the middle operand remains");

    assert!(solver.is_true(bools[1]));
}

#[test]
fn or_is_satisfied_by_any_true_operand() {
    let mut solver = TestSolver::default();

    let bools: Vec<_> = (0..2).map(|_| solver.new_boolean()).collect();
    solver.set_boolean(bools[0], true);
    solver.set_boolean(bools[1], false);

    let _ = solver
        .new_propagator(OrPropagator::new(bools.into_boxed_slice()))
        .expect("one operand is true");
}

#[test]
fn exactly_one_excludes_the_rest_once_decided() {
    let mut solver = TestSolver::default();

    let bools: Vec<_> = (0..3).map(|_| solver.new_boolean()).collect();

    let propagator = solver
        .new_propagator(ExactlyOnePropagator::new(bools.clone().into_boxed_slice()))
        .expect("nothing is decided yet");

    solver.set_boolean(bools[1], true);
    solver
        .propagate(propagator)
        .expect("one true operand is fine");

    assert!(solver.is_false(bools[0]));
    assert!(solver.is_false(bools[2]));
}

#[test]
fn exactly_one_forces_the_last_candidate() {
    let mut solver = TestSolver::default();

    let bools: Vec<_> = (0..2).map(|_| solver.new_boolean()).collect();

    let propagator = solver
        .new_propagator(ExactlyOnePropagator::new(bools.clone().into_boxed_slice()))
        .expect("nothing is decided yet");

    solver.set_boolean(bools[0], false);
    solver
        .propagate(propagator)
        .expect("the other operand remains");

    assert!(solver.is_true(bools[1]));
}

#[test]
fn exactly_one_conflicts_when_all_operands_fail() {
    let mut solver = TestSolver::default();

    let bools: Vec<_> = (0..2).map(|_| solver.new_boolean()).collect();
    solver.set_boolean(bools[0], false);
    solver.set_boolean(bools[1], false);

    let _ = solver
        .new_propagator(ExactlyOnePropagator::new(bools.into_boxed_slice()))
        .expect_err("no operand can be the one");
}

#[test]
fn at_most_one_allows_all_false() {
    let mut solver = TestSolver::default();

    let bools: Vec<_> = (0..3).map(|_| solver.new_boolean()).collect();
    for &var in &bools {
        solver.set_boolean(var, false);
    }

    let _ = solver
        .new_propagator(AtMostOnePropagator::new(bools.into_boxed_slice()))
        .expect("zero true operands satisfy the bound");
}

#[test]
fn at_most_one_conflicts_with_two_true_operands() {
    let mut solver = TestSolver::default();

    let bools: Vec<_> = (0..3).map(|_| solver.new_boolean()).collect();
    solver.set_boolean(bools[0], true);
    solver.set_boolean(bools[2], true);

    let _ = solver
        .new_propagator(AtMostOnePropagator::new(bools.into_boxed_slice()))
        .expect_err("two true operands exceed the bound");
}

#[test]
fn a_true_literal_fixes_the_reified_equality() {
    let mut solver = TestSolver::default();

    let literal = solver.new_boolean();
    let var = solver.new_variable(1, 5);

    let propagator = solver
        .new_propagator(ReifyEqualPropagator::new(literal, var, 3))
        .expect("nothing is decided yet");

    solver.set_boolean(literal, true);
    solver.propagate(propagator).expect("3 is available");

    solver.assert_fixed(var, 3);
}

#[test]
fn a_removed_value_falsifies_the_reified_equality() {
    let mut solver = TestSolver::default();

    let literal = solver.new_boolean();
    let var = solver.new_variable(1, 5);

    let propagator = solver
        .new_propagator(ReifyEqualPropagator::new(literal, var, 3))
        .expect("nothing is decided yet");

    solver.remove(var, 3);
    solver
        .propagate(propagator)
        .expect("the literal absorbs the removal");

    assert!(solver.is_false(literal));
}

#[test]
fn a_fixed_match_verifies_the_reified_equality() {
    let mut solver = TestSolver::default();

    let literal = solver.new_boolean();
    let var = solver.new_variable(3, 3);

    let _ = solver
        .new_propagator(ReifyEqualPropagator::new(literal, var, 3))
        .expect("nothing conflicts");

    assert!(solver.is_true(literal));
}

#[test]
fn the_reified_disequality_mirrors_the_equality() {
    let mut solver = TestSolver::default();

    let literal = solver.new_boolean();
    let var = solver.new_variable(1, 5);

    let propagator = solver
        .new_propagator(ReifyNotEqualPropagator::new(literal, var, 3))
        .expect("nothing is decided yet");

    solver.set_boolean(literal, false);
    solver.propagate(propagator).expect("3 is available");

    solver.assert_fixed(var, 3);
}
