//! A digit that fits nowhere else in a house must go in the one cell left.

use sudoku_core::{DigitSet, Grid, Position, Shape};

use crate::step::{Action, SolveStep, SolveStepKind};

fn build_step(grid: &Grid, shape: Shape, pos: Position, digit: sudoku_core::Digit) -> SolveStep {
    let mut affected = vec![pos];
    let mut actions = vec![
        Action::SetNumber { pos, value: digit },
        Action::SetCandidates {
            pos,
            set: DigitSet::from_iter_digits([digit]),
        },
    ];
    for peer in shape.surrounding_of(pos, false) {
        let peer_candidates = grid.get_candidates(peer).expect("peer in grid");
        if peer_candidates.contains(digit) {
            affected.push(peer);
            actions.push(Action::RemoveCandidates {
                pos: peer,
                set: DigitSet::from_iter_digits([digit]),
            });
        }
    }
    SolveStep::new(
        SolveStepKind::HiddenSingle,
        vec![pos],
        affected,
        vec![digit],
        actions,
    )
}

pub(super) fn find(grid: &Grid) -> Vec<SolveStep> {
    let shape = grid.shape();
    let n = shape.side();
    let mut steps = Vec::new();
    let mut yielded: Vec<Position> = Vec::new();

    for pos in grid.empty() {
        if yielded.contains(&pos) {
            continue;
        }
        for house_fn in [Shape::column_of, Shape::row_of, Shape::box_of] {
            let mut survivors = DigitSet::full(n);
            for peer in house_fn(shape, pos, false) {
                let peer_candidates = grid.get_candidates(peer).expect("peer in grid");
                survivors = survivors - peer_candidates;
            }

            let mut found = false;
            for digit in survivors.iter() {
                if yielded.contains(&pos) {
                    continue;
                }
                yielded.push(pos);
                steps.push(build_step(grid, shape, pos, digit));
                found = true;
            }
            if found {
                break;
            }
        }
    }
    steps
}
