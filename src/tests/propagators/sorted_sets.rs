#![cfg(test)]
use crate::engine::test_helper::TestSolver;
use crate::propagators::sorted_sets::SortedSetsCardPropagator;
use crate::propagators::sorted_sets::SortedSetsPropagator;

#[test]
fn the_cardinality_prefix_confines_each_block() {
    let mut solver = TestSolver::default();

    let first = solver.new_set_variable_with_card(&[0, 1, 2], 1, 2);
    let second = solver.new_set_variable_with_card(&[0, 1, 2], 1, 1);

    let _ = solver
        .new_propagator(SortedSetsCardPropagator::new([first, second].into()))
        .expect("the blocks are consistent");

    // The first block starts at 0 and holds at most two positions; the
    // second begins after it.
    solver.assert_env(first, &[0, 1]);
    solver.assert_ker(first, &[0]);
    solver.assert_env(second, &[1, 2]);
}

#[test]
fn certainly_covered_positions_are_forced() {
    let mut solver = TestSolver::default();

    let first = solver.new_set_variable_with_card(&[0, 1], 2, 2);
    let second = solver.new_set_variable_with_card(&[0, 1, 2], 1, 1);

    let _ = solver
        .new_propagator(SortedSetsCardPropagator::new([first, second].into()))
        .expect("the blocks are consistent");

    solver.assert_set_fixed(first, &[0, 1]);
    solver.assert_set_fixed(second, &[2]);
}

#[test]
fn a_required_predecessor_pushes_the_successor_up() {
    let mut solver = TestSolver::default();

    let first = solver.new_set_variable_with_card(&[0, 1, 2], 1, 3);
    let second = solver.new_set_variable(&[0, 1, 2]);

    let _ = solver
        .new_propagator(SortedSetsPropagator::new([first, second].into()))
        .expect("the chain is consistent");

    // The first set certainly takes position 0 or later, so the second
    // starts past it.
    solver.assert_env(second, &[1, 2]);
}

#[test]
fn a_required_successor_element_caps_the_predecessor() {
    let mut solver = TestSolver::default();

    let first = solver.new_set_variable_with_card(&[0, 1, 2], 1, 2);
    let second = solver.new_set_variable(&[1, 2]);

    let propagator = solver
        .new_propagator(SortedSetsPropagator::new([first, second].into()))
        .expect("the chain is consistent");

    solver.ker_add(second, 1);
    solver
        .propagate(propagator)
        .expect("position 0 remains for the first set");

    // Everything at or past the required element leaves the first set,
    // and the single remaining candidate is forced.
    solver.assert_set_fixed(first, &[0]);
}

#[test]
fn a_required_successor_with_no_room_conflicts() {
    let mut solver = TestSolver::default();

    let first = solver.new_set_variable_with_card(&[1, 2], 1, 2);
    // The successor certainly holds position 1 from the start.
    let second = solver.new_set_variable_with_card(&[1], 1, 1);

    let _ = solver
        .new_propagator(SortedSetsPropagator::new([first, second].into()))
        .expect_err("the first set has no position before 1");
}

#[test]
fn the_chain_and_its_cardinalities_close_under_joint_propagation() {
    let mut solver = TestSolver::default();

    let first = solver.new_set_variable_with_card(&[0, 1, 2], 1, 1);
    let second = solver.new_set_variable_with_card(&[0, 1, 2], 1, 1);

    let _ = solver
        .new_propagator(SortedSetsPropagator::new([first, second].into()))
        .expect("the chain is consistent");
    let _ = solver
        .new_propagator(SortedSetsCardPropagator::new([first, second].into()))
        .expect("the blocks are consistent");

    solver
        .propagate_until_fixed_point()
        .expect("the chain is consistent");

    solver.assert_set_fixed(first, &[0]);
    solver.assert_set_fixed(second, &[1]);
}
