#![cfg(test)]
use crate::engine::test_helper::TestSolver;
use crate::propagators::filter_string::FilterStringPropagator;

#[test]
fn indices_outside_the_string_are_removed() {
    let mut solver = TestSolver::default();

    let set = solver.new_set_variable(&[0, 1, 5]);
    let string: Vec<_> = (0..3).map(|_| solver.new_variable(1, 9)).collect();
    let result: Vec<_> = (0..2).map(|_| solver.new_sparse_variable(&[-1, 1, 9])).collect();

    let _ = solver
        .new_propagator(FilterStringPropagator::new(
            set,
            0,
            string.into_boxed_slice(),
            result.into_boxed_slice(),
        ))
        .expect("the filter is consistent");

    // Index 5 has no slot, and the result length caps the selection.
    solver.assert_env(set, &[0, 1]);
    solver.assert_card_bounds(set, 0, 2);
}

#[test]
fn the_offset_shifts_the_admissible_indices() {
    let mut solver = TestSolver::default();

    let set = solver.new_set_variable(&[9, 10, 13]);
    let string: Vec<_> = (0..3).map(|_| solver.new_variable(1, 9)).collect();
    let result: Vec<_> = (0..3).map(|_| solver.new_sparse_variable(&[-1, 1, 9])).collect();

    let _ = solver
        .new_propagator(FilterStringPropagator::new(
            set,
            10,
            string.into_boxed_slice(),
            result.into_boxed_slice(),
        ))
        .expect("the filter is consistent");

    // Only 10, 11 and 12 address a slot.
    solver.assert_env(set, &[10]);
}

#[test]
fn the_padding_channels_the_cardinality() {
    let mut solver = TestSolver::default();

    let set = solver.new_set_variable(&[0, 1, 2]);
    let string: Vec<_> = (0..3).map(|_| solver.new_variable(1, 9)).collect();
    let result: Vec<_> = (0..3).map(|_| solver.new_sparse_variable(&[-1, 1, 9])).collect();

    let propagator = solver
        .new_propagator(FilterStringPropagator::new(
            set,
            0,
            string.into_boxed_slice(),
            result.clone().into_boxed_slice(),
        ))
        .expect("the filter is consistent");

    solver.fix(result[1], -1);
    solver
        .propagate(propagator)
        .expect("a padded position caps the selection");

    // Padding at position 1 means fewer than two indices are selected,
    // which pads position 2 as well.
    solver.assert_card_bounds(set, 0, 1);
    solver.assert_fixed(result[2], -1);
}

#[test]
fn the_cardinality_channels_the_padding() {
    let mut solver = TestSolver::default();

    let set = solver.new_set_variable_with_card(&[0, 1, 2], 2, 3);
    let string: Vec<_> = (0..3).map(|_| solver.new_variable(1, 9)).collect();
    let result: Vec<_> = (0..3).map(|_| solver.new_sparse_variable(&[-1, 1, 9])).collect();

    let _ = solver
        .new_propagator(FilterStringPropagator::new(
            set,
            0,
            string.into_boxed_slice(),
            result.clone().into_boxed_slice(),
        ))
        .expect("the filter is consistent");

    // At least two indices are selected, so the first two positions carry
    // string values.
    solver.assert_domain(result[0], &[1, 9]);
    solver.assert_domain(result[1], &[1, 9]);
}

#[test]
fn a_decided_selection_channels_the_values() {
    let mut solver = TestSolver::default();

    let set = solver.new_set_variable_with_card(&[0, 2], 2, 2);
    let first = solver.new_variable(4, 5);
    let middle = solver.new_variable(1, 9);
    let last = solver.new_variable(7, 7);
    let result: Vec<_> = (0..2)
        .map(|_| solver.new_sparse_variable(&[-1, 4, 7, 8]))
        .collect();

    let _ = solver
        .new_propagator(FilterStringPropagator::new(
            set,
            0,
            [first, middle, last].into(),
            result.clone().into_boxed_slice(),
        ))
        .expect("the filter is consistent");

    // set is fixed to {0, 2}: position 0 mirrors slot 0, position 1 slot 2.
    solver.assert_fixed(result[0], 4);
    solver.assert_fixed(first, 4);
    solver.assert_fixed(result[1], 7);
}
