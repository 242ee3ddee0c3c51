//! The last-resort finder: fill in a cell straight from a full search solution.

use sudoku_core::{Digit, Grid};

use crate::backtrack;
use crate::step::{Action, SolveStep, SolveStepKind};

pub(super) fn find(grid: &Grid) -> Vec<SolveStep> {
    let Some(solution) = backtrack::bruteforce(grid).next() else {
        return Vec::new();
    };

    let mut steps = Vec::new();
    for pos in grid.diff(&solution) {
        let value = solution.get(pos).expect("pos came from grid.diff()");
        let digit = Digit::new(value);
        steps.push(SolveStep::new(
            SolveStepKind::Bruteforce,
            vec![pos],
            vec![pos],
            vec![digit],
            vec![Action::SetNumber { pos, value: digit }],
        ));
    }
    steps
}
