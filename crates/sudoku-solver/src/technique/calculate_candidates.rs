//! Fills in candidates for empty cells that don't have any yet.

use sudoku_core::{basic_solve::calc_candidates, Grid};

use crate::step::{Action, SolveStep, SolveStepKind};

pub(super) fn find(grid: &Grid) -> Vec<SolveStep> {
    let mut steps = Vec::new();
    for pos in grid.all_cells() {
        let current = grid.get_candidates(pos).expect("pos from grid.all_cells()");
        if !current.is_empty() {
            continue;
        }
        let computed = calc_candidates(grid, pos).expect("pos from grid.all_cells()");
        steps.push(SolveStep::new(
            SolveStepKind::CalculateCandidates,
            vec![pos],
            vec![pos],
            computed.iter().collect(),
            vec![Action::SetCandidates { pos, set: computed }],
        ));
    }
    steps
}
