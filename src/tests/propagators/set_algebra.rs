#![cfg(test)]
use crate::engine::test_helper::TestSolver;
use crate::propagators::not_member::NotMemberPropagator;
use crate::propagators::set_difference::SetDifferencePropagator;
use crate::propagators::set_equal::SetEqualPropagator;
use crate::propagators::set_not_equal::SetNotEqualConstantPropagator;
use crate::propagators::set_not_equal::SetNotEqualPropagator;
use crate::propagators::set_union::SetUnionCardPropagator;
use crate::propagators::set_union::SetUnionPropagator;

#[test]
fn union_membership_flows_both_ways() {
    let mut solver = TestSolver::default();

    let a = solver.new_set_variable(&[1, 2]);
    let b = solver.new_set_variable(&[2, 3]);
    let union = solver.new_set_variable(&[1, 2, 3, 4]);

    let propagator = solver
        .new_propagator(SetUnionPropagator::new([a, b].into(), union))
        .expect("the union is consistent");

    // 4 has no possible supplier.
    solver.assert_env(union, &[1, 2, 3]);

    solver.ker_add(a, 1);
    solver.propagate(propagator).expect("1 fits the union");
    solver.assert_ker(union, &[1]);

    solver.ker_add(union, 3);
    solver.propagate(propagator).expect("b supplies 3");
    solver.assert_ker(b, &[3]);
}

#[test]
fn union_cardinality_is_bounded_by_the_operands() {
    let mut solver = TestSolver::default();

    let a = solver.new_set_variable_with_card(&[1, 2], 1, 1);
    let b = solver.new_set_variable_with_card(&[2, 3], 0, 1);
    let union = solver.new_set_variable(&[1, 2, 3]);

    let _ = solver
        .new_propagator(SetUnionCardPropagator::new([a, b].into(), union))
        .expect("the cardinalities are consistent");

    solver.assert_card_bounds(union, 1, 2);
}

#[test]
fn an_operand_covers_what_the_others_cannot() {
    let mut solver = TestSolver::default();

    let a = solver.new_set_variable_with_card(&[1, 2, 3], 0, 3);
    let b = solver.new_set_variable_with_card(&[4], 0, 1);
    let union = solver.new_set_variable_with_card(&[1, 2, 3, 4], 3, 4);

    let _ = solver
        .new_propagator(SetUnionCardPropagator::new([a, b].into(), union))
        .expect("the cardinalities are consistent");

    // b contributes at most one element, so a carries at least two.
    solver.assert_card_bounds(a, 2, 3);
}

#[test]
fn difference_membership_is_decided_pointwise() {
    let mut solver = TestSolver::default();

    let minuend = solver.new_set_variable(&[1, 2, 3]);
    let subtrahend = solver.new_set_variable(&[2]);
    let difference = solver.new_set_variable(&[1, 2, 3]);

    let propagator = solver
        .new_propagator(SetDifferencePropagator::new(
            minuend, subtrahend, difference,
        ))
        .expect("the difference is consistent");

    solver.ker_add(minuend, 1);
    solver.ker_add(subtrahend, 2);
    solver
        .propagate(propagator)
        .expect("the difference is consistent");

    // 1 cannot be subtracted, 2 certainly is.
    solver.assert_ker(difference, &[1]);
    assert!(!solver.env(difference).contains(&2));
}

#[test]
fn a_required_difference_element_constrains_both_operands() {
    let mut solver = TestSolver::default();

    let minuend = solver.new_set_variable(&[1, 2]);
    let subtrahend = solver.new_set_variable(&[1, 2]);
    let difference = solver.new_set_variable(&[1, 2]);

    let propagator = solver
        .new_propagator(SetDifferencePropagator::new(
            minuend, subtrahend, difference,
        ))
        .expect("the difference is consistent");

    solver.ker_add(difference, 1);
    solver
        .propagate(propagator)
        .expect("the difference is consistent");

    solver.assert_ker(minuend, &[1]);
    solver.assert_env(subtrahend, &[2]);
}

#[test]
fn a_retained_element_must_go_somewhere() {
    let mut solver = TestSolver::default();

    // The cardinality forces 1 into the minuend at creation.
    let minuend = solver.new_set_variable_with_card(&[1, 2], 2, 2);
    let subtrahend = solver.new_set_variable(&[2]);
    let difference = solver.new_set_variable(&[2]);

    let _ = solver
        .new_propagator(SetDifferencePropagator::new(
            minuend, subtrahend, difference,
        ))
        .expect_err("1 is neither subtracted nor kept");
}

#[test]
fn equal_sets_share_their_envelopes_and_kernels() {
    let mut solver = TestSolver::default();

    let left = solver.new_set_variable(&[1, 2, 3]);
    let right = solver.new_set_variable(&[2, 3]);

    let propagator = solver
        .new_propagator(SetEqualPropagator::new(left, right))
        .expect("the equality is consistent");

    solver.assert_env(left, &[2, 3]);

    solver.ker_add(right, 3);
    solver.propagate(propagator).expect("3 fits both sides");
    solver.assert_ker(left, &[3]);
}

#[test]
fn not_equal_only_fails_on_identical_instantiations() {
    let mut solver = TestSolver::default();

    let left = solver.new_set_variable_with_card(&[1, 2], 2, 2);
    let right = solver.new_set_variable(&[1, 2]);

    let propagator = solver
        .new_propagator(SetNotEqualPropagator::new(left, right))
        .expect("the right side is still free");

    solver.ker_add(right, 1);
    solver.ker_add(right, 2);
    solver.set_card_bounds(right, 2, 2);
    let _ = solver
        .propagate(propagator)
        .expect_err("both sides are now {1, 2}");
}

#[test]
fn not_equal_constant_accepts_a_different_instantiation() {
    let mut solver = TestSolver::default();

    let set = solver.new_set_variable_with_card(&[1, 3], 2, 2);

    let propagator = solver
        .new_propagator(SetNotEqualConstantPropagator::new(set, [1, 2].into()))
        .expect("{1, 3} differs from {1, 2}");

    solver
        .propagate(propagator)
        .expect("{1, 3} differs from {1, 2}");
}

#[test]
fn not_equal_constant_rejects_the_forbidden_instantiation() {
    let mut solver = TestSolver::default();

    let set = solver.new_set_variable_with_card(&[1, 2], 2, 2);

    let _ = solver
        .new_propagator(SetNotEqualConstantPropagator::new(set, [1, 2].into()))
        .expect_err("the set is forced to the forbidden value");
}

#[test]
fn not_member_separates_the_element_and_the_set() {
    let mut solver = TestSolver::default();

    let element = solver.new_variable(1, 3);
    let set = solver.new_set_variable(&[1, 2, 3]);

    let propagator = solver
        .new_propagator(NotMemberPropagator::new(element, set))
        .expect("nothing is decided yet");

    solver.ker_add(set, 2);
    solver.propagate(propagator).expect("2 leaves the element");
    solver.assert_domain(element, &[1, 3]);

    solver.fix(element, 1);
    solver.propagate(propagator).expect("1 leaves the envelope");
    solver.assert_env(set, &[2, 3]);
}
