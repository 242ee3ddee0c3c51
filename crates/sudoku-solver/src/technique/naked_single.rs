//! A cell with exactly one candidate must hold that digit.

use sudoku_core::{DigitSet, Grid};

use crate::step::{Action, SolveStep, SolveStepKind};

pub(super) fn find(grid: &Grid) -> Vec<SolveStep> {
    let shape = grid.shape();
    let mut steps = Vec::new();
    for pos in grid.empty() {
        let candidates = grid.get_candidates(pos).expect("pos from grid.empty()");
        let Some(digit) = candidates.single() else {
            continue;
        };

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

        steps.push(SolveStep::new(
            SolveStepKind::NakedSingle,
            vec![pos],
            affected,
            vec![digit],
            actions,
        ));
    }
    steps
}
