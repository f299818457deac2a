#![cfg(test)]
use crate::engine::cp::propagation::PropagatorId;
use crate::engine::test_helper::TestSolver;
use crate::propagators::int_channel::IntChannelPropagator;
use crate::propagators::join_relation::JoinRelationPropagator;
use crate::propagators::select_n::SelectNPropagator;
use crate::propagators::set_union::SetUnionCardPropagator;
use crate::propagators::set_union::SetUnionPropagator;

/// Re-runs the given propagators on domains already at their fixpoint and
/// asserts that none of them writes.
fn assert_no_writes_at_fixpoint(solver: &mut TestSolver, propagators: &[PropagatorId]) {
    let _ = solver.assignments.drain_events();
    for &id in propagators {
        solver
            .propagate(id)
            .expect("the domains are already at a fixpoint");
    }
    assert!(
        solver.assignments.drain_events().is_empty(),
        "a propagator narrowed a domain at its own fixpoint"
    );
}

#[test]
fn the_join_performs_no_writes_at_its_fixpoint() {
    let mut solver = TestSolver::default();

    let take = solver.new_set_variable(&[0, 1]);
    let first = solver.new_set_variable(&[5]);
    let second = solver.new_set_variable(&[6, 7]);
    let to = solver.new_set_variable(&[5, 6, 7, 8]);

    let propagator = solver
        .new_propagator(JoinRelationPropagator::new(
            take,
            [first, second].into(),
            to,
        ))
        .expect("the join is consistent");

    solver.ker_add(take, 0);
    solver
        .propagate_until_fixed_point()
        .expect("selecting 0 is fine");

    assert_no_writes_at_fixpoint(&mut solver, &[propagator]);
}

#[test]
fn the_union_pair_performs_no_writes_at_its_fixpoint() {
    let mut solver = TestSolver::default();

    let a = solver.new_set_variable_with_card(&[1, 2], 1, 1);
    let b = solver.new_set_variable(&[2, 3]);
    let union = solver.new_set_variable(&[1, 2, 3, 4]);

    let membership = solver
        .new_propagator(SetUnionPropagator::new([a, b].into(), union))
        .expect("the union is consistent");
    let cardinality = solver
        .new_propagator(SetUnionCardPropagator::new([a, b].into(), union))
        .expect("the cardinalities are consistent");

    solver.ker_add(union, 3);
    solver
        .propagate_until_fixed_point()
        .expect("b supplies 3");

    assert_no_writes_at_fixpoint(&mut solver, &[membership, cardinality]);
}

#[test]
fn the_channel_performs_no_writes_at_its_fixpoint() {
    let mut solver = TestSolver::default();

    let buckets: Vec<_> = (0..2).map(|_| solver.new_set_variable(&[0, 1])).collect();
    let ints: Vec<_> = (0..2).map(|_| solver.new_variable(0, 1)).collect();

    let propagator = solver
        .new_propagator(IntChannelPropagator::new(
            buckets.into_boxed_slice(),
            ints.clone().into_boxed_slice(),
        ))
        .expect("the channel is consistent");

    solver.fix(ints[0], 1);
    solver
        .propagate_until_fixed_point()
        .expect("assigning index 0 to bucket 1 is consistent");

    assert_no_writes_at_fixpoint(&mut solver, &[propagator]);
}

#[test]
fn the_prefix_form_performs_no_writes_at_its_fixpoint() {
    let mut solver = TestSolver::default();

    let bools: Vec<_> = (0..4).map(|_| solver.new_boolean()).collect();
    let n = solver.new_variable(0, 4);

    let propagator = solver
        .new_propagator(SelectNPropagator::new(bools.into_boxed_slice(), n))
        .expect("nothing is decided yet");

    solver.increase_lower_bound(n, 3);
    solver
        .propagate_until_fixed_point()
        .expect("a prefix of length 3 or 4 exists");

    assert_no_writes_at_fixpoint(&mut solver, &[propagator]);
}
