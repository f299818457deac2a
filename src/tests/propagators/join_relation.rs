#![cfg(test)]
use crate::engine::test_helper::TestSolver;
use crate::propagators::join_injective_relation_card::JoinInjectiveRelationCardPropagator;
use crate::propagators::join_relation::JoinRelationPropagator;

#[test]
fn selected_kernels_flow_into_the_join() {
    let mut solver = TestSolver::default();

    let take = solver.new_set_variable(&[0, 1]);
    let first = solver.new_set_variable_with_card(&[5], 1, 1);
    let second = solver.new_set_variable(&[6, 7]);
    let to = solver.new_set_variable(&[5, 6, 7, 8]);

    let propagator = solver
        .new_propagator(JoinRelationPropagator::new(
            take,
            [first, second].into(),
            to,
        ))
        .expect("the join is consistent");

    // 8 has no possible supplier.
    solver.assert_env(to, &[5, 6, 7]);

    solver.ker_add(take, 0);
    solver.propagate(propagator).expect("selecting 0 is fine");
    solver.assert_ker(to, &[5]);
}

#[test]
fn an_out_of_range_index_is_dropped_from_take() {
    let mut solver = TestSolver::default();

    let take = solver.new_set_variable(&[0, 1, 7]);
    let child = solver.new_set_variable(&[3]);
    let to = solver.new_set_variable(&[3]);

    let _ = solver
        .new_propagator(JoinRelationPropagator::new(take, [child].into(), to))
        .expect("the join is consistent");

    solver.assert_env(take, &[0]);
}

#[test]
fn a_needed_element_forces_its_unique_supplier() {
    let mut solver = TestSolver::default();

    let take = solver.new_set_variable(&[0, 1]);
    let first = solver.new_set_variable(&[5]);
    let second = solver.new_set_variable(&[6, 7]);
    let to = solver.new_set_variable(&[5, 6, 7]);

    let propagator = solver
        .new_propagator(JoinRelationPropagator::new(
            take,
            [first, second].into(),
            to,
        ))
        .expect("the join is consistent");

    solver.ker_add(to, 6);
    solver
        .propagate(propagator)
        .expect("the second child supplies 6");

    solver.assert_ker(take, &[1]);
    solver.assert_ker(second, &[6]);
}

#[test]
fn a_child_with_a_forbidden_kernel_element_is_deselected() {
    let mut solver = TestSolver::default();

    let take = solver.new_set_variable(&[0, 1]);
    let first = solver.new_set_variable_with_card(&[9], 1, 1);
    let second = solver.new_set_variable(&[6]);
    let to = solver.new_set_variable(&[6]);

    let _ = solver
        .new_propagator(JoinRelationPropagator::new(
            take,
            [first, second].into(),
            to,
        ))
        .expect("the join is consistent");

    // The first child certainly contains 9, which the join forbids.
    solver.assert_env(take, &[1]);
}

#[test]
fn disjoint_children_make_the_join_cardinality_additive() {
    let mut solver = TestSolver::default();

    let take = solver.new_set_variable_with_card(&[0, 1], 2, 2);
    let first = solver.new_set_variable_with_card(&[1, 2], 1, 2);
    let second = solver.new_set_variable_with_card(&[5, 6], 1, 1);
    let to = solver.new_set_variable(&[1, 2, 5, 6]);

    let _ = solver
        .new_propagator(JoinInjectiveRelationCardPropagator::new(
            take,
            [first, second].into(),
            to,
        ))
        .expect("the cardinalities are consistent");

    solver.assert_card_bounds(to, 2, 3);
}

#[test]
fn the_join_cardinality_bounds_the_selection() {
    let mut solver = TestSolver::default();

    let take = solver.new_set_variable(&[0, 1, 2]);
    let first = solver.new_set_variable_with_card(&[1], 1, 1);
    let second = solver.new_set_variable_with_card(&[2], 1, 1);
    let third = solver.new_set_variable_with_card(&[3], 1, 1);
    let to = solver.new_set_variable_with_card(&[1, 2, 3], 2, 3);

    let _ = solver
        .new_propagator(JoinInjectiveRelationCardPropagator::new(
            take,
            [first, second, third].into(),
            to,
        ))
        .expect("the cardinalities are consistent");

    // Every child contributes exactly one element, so at least two children
    // must be selected.
    solver.assert_card_bounds(take, 2, 3);
}
