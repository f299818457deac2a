#![cfg(test)]
use crate::engine::test_helper::TestSolver;
use crate::propagators::lex_chain_channel::LexChainChannelPropagator;
use crate::variables::IntVar;

fn string(solver: &mut TestSolver, bounds: &[(i32, i32)]) -> Box<[IntVar]> {
    bounds
        .iter()
        .map(|&(low, high)| solver.new_variable(low, high))
        .collect()
}

#[test]
fn a_decided_string_order_separates_the_ranks() {
    let mut solver = TestSolver::default();

    let x = string(&mut solver, &[(1, 1), (1, 9)]);
    let y = string(&mut solver, &[(2, 2), (1, 9)]);
    let ranks: Vec<_> = (0..2).map(|_| solver.new_variable(0, 1)).collect();

    let _ = solver
        .new_propagator(LexChainChannelPropagator::new(
            [x, y].into(),
            ranks.clone().into_boxed_slice(),
        ))
        .expect("the channel is consistent");

    // x < y at the first position, so the ranks are 0 and 1.
    solver.assert_fixed(ranks[0], 0);
    solver.assert_fixed(ranks[1], 1);
}

#[test]
fn a_decided_rank_order_constrains_the_first_free_position() {
    let mut solver = TestSolver::default();

    let x = string(&mut solver, &[(2, 3), (1, 9)]);
    let y = string(&mut solver, &[(1, 2), (1, 9)]);
    let x_head = x[0];
    let y_head = y[0];
    let rank_x = solver.new_variable(0, 0);
    let rank_y = solver.new_variable(1, 1);

    let _ = solver
        .new_propagator(LexChainChannelPropagator::new(
            [x, y].into(),
            [rank_x, rank_y].into(),
        ))
        .expect("the channel is consistent");

    // x must precede y, so their heads meet at 2.
    solver.assert_fixed(x_head, 2);
    solver.assert_fixed(y_head, 2);
}

#[test]
fn equal_ranks_merge_the_strings() {
    let mut solver = TestSolver::default();

    let x = string(&mut solver, &[(1, 2), (1, 2)]);
    let y = string(&mut solver, &[(1, 2), (2, 3)]);
    let x_tail = x[1];
    let y_tail = y[1];
    let rank_x = solver.new_variable(0, 0);
    let rank_y = solver.new_variable(0, 0);

    let _ = solver
        .new_propagator(LexChainChannelPropagator::new(
            [x, y].into(),
            [rank_x, rank_y].into(),
        ))
        .expect("the channel is consistent");

    solver.assert_fixed(x_tail, 2);
    solver.assert_fixed(y_tail, 2);
}

#[test]
fn identical_strings_equalise_the_ranks() {
    let mut solver = TestSolver::default();

    let x = string(&mut solver, &[(4, 4), (7, 7)]);
    let y = string(&mut solver, &[(4, 4), (7, 7)]);
    let rank_x = solver.new_variable(0, 1);
    let rank_y = solver.new_variable(1, 1);

    let _ = solver
        .new_propagator(LexChainChannelPropagator::new(
            [x, y].into(),
            [rank_x, rank_y].into(),
        ))
        .expect("the channel is consistent");

    solver.assert_fixed(rank_x, 1);
}

#[test]
fn contradictory_ranks_for_identical_strings_conflict() {
    let mut solver = TestSolver::default();

    let x = string(&mut solver, &[(4, 4)]);
    let y = string(&mut solver, &[(4, 4)]);
    let rank_x = solver.new_variable(1, 1);
    let rank_y = solver.new_variable(0, 0);

    let _ = solver
        .new_propagator(LexChainChannelPropagator::new(
            [x, y].into(),
            [rank_x, rank_y].into(),
        ))
        .expect_err("equal strings cannot have distinct ranks");
}
