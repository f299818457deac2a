#![cfg(test)]
use crate::engine::test_helper::TestSolver;
use crate::propagators::array_to_set::ArrayToSetCardPropagator;
use crate::propagators::array_to_set::ArrayToSetPropagator;

#[test]
fn slot_domains_are_confined_to_the_envelope() {
    let mut solver = TestSolver::default();

    let x = solver.new_variable(1, 4);
    let y = solver.new_variable(3, 3);
    let set = solver.new_set_variable(&[1, 2, 3]);

    let _ = solver
        .new_propagator(ArrayToSetPropagator::new([x, y].into(), set))
        .expect("every slot has candidates");

    // 4 is outside the envelope, and the fixed slot forces 3 in.
    solver.assert_bounds(x, 1, 3);
    solver.assert_ker(set, &[3]);
}

#[test]
fn an_unreachable_envelope_value_is_removed() {
    let mut solver = TestSolver::default();

    let x = solver.new_variable(1, 2);
    let y = solver.new_variable(1, 2);
    let set = solver.new_set_variable(&[1, 2, 5]);

    let _ = solver
        .new_propagator(ArrayToSetPropagator::new([x, y].into(), set))
        .expect("every slot has candidates");

    solver.assert_env(set, &[1, 2]);
}

#[test]
fn a_kernel_value_with_a_single_supporter_fixes_that_slot() {
    let mut solver = TestSolver::default();

    let x = solver.new_variable(1, 2);
    let y = solver.new_variable(2, 2);
    let set = solver.new_set_variable(&[1, 2]);

    let propagator = solver
        .new_propagator(ArrayToSetPropagator::new([x, y].into(), set))
        .expect("every slot has candidates");

    solver.ker_add(set, 1);
    solver
        .propagate(propagator)
        .expect("slot x can still take 1");

    solver.assert_fixed(x, 1);
}

#[test]
fn the_global_cardinality_pins_the_set_size() {
    let mut solver = TestSolver::default();

    let slots: Vec<_> = (0..4).map(|_| solver.new_variable(1, 3)).collect();
    let set = solver.new_set_variable(&[1, 2, 3]);

    let _ = solver
        .new_propagator(ArrayToSetCardPropagator::new(
            slots.into_boxed_slice(),
            set,
            Some(2),
        ))
        .expect("4 slots over 2 values is feasible");

    solver.assert_card_bounds(set, 2, 2);
}

#[test]
fn an_indivisible_slot_count_conflicts() {
    let mut solver = TestSolver::default();

    let slots: Vec<_> = (0..3).map(|_| solver.new_variable(1, 3)).collect();
    let set = solver.new_set_variable(&[1, 2, 3]);

    let _ = solver
        .new_propagator(ArrayToSetCardPropagator::new(
            slots.into_boxed_slice(),
            set,
            Some(2),
        ))
        .expect_err("3 slots cannot hit every value exactly twice");
}

#[test]
fn a_filled_quota_excludes_the_remaining_slots() {
    let mut solver = TestSolver::default();

    let x = solver.new_variable(1, 1);
    let y = solver.new_variable(1, 1);
    let z = solver.new_variable(1, 2);
    let w = solver.new_variable(1, 2);
    let set = solver.new_set_variable(&[1, 2]);

    let _ = solver
        .new_propagator(ArrayToSetCardPropagator::new(
            [x, y, z, w].into(),
            set,
            Some(2),
        ))
        .expect("the quota of 1 is exactly filled");

    // x and y exhaust the quota for 1, so z and w must take 2.
    solver.assert_fixed(z, 2);
    solver.assert_fixed(w, 2);
}
