//! Hidden n-tuples: n digits in a house collectively confined to n cells.

use sudoku_core::{Digit, DigitSet, Grid, Position};

use crate::step::{Action, SolveStep, SolveStepKind};
use crate::technique::{all_houses, combinations};

fn find_n(grid: &Grid, n: usize, kind: SolveStepKind) -> Vec<SolveStep> {
    let shape = grid.shape();
    let side = shape.side();
    let mut steps = Vec::new();
    let mut yielded: Vec<Vec<Position>> = Vec::new();

    for house in all_houses(shape) {
        let narrow: Vec<Digit> = Digit::all(side)
            .into_iter()
            .filter(|&digit| {
                let count = house
                    .iter()
                    .filter(|&&pos| grid.get_candidates(pos).expect("pos in house").contains(digit))
                    .count();
                (2..=n).contains(&count)
            })
            .collect();

        for combo in combinations(&narrow, n) {
            let digit_set = DigitSet::from_iter_digits(combo.iter().copied());
            let cells: Vec<Position> = house
                .iter()
                .copied()
                .filter(|&pos| {
                    let candidates = grid.get_candidates(pos).expect("pos in house");
                    !(candidates & digit_set).is_empty()
                })
                .collect();
            if cells.len() > n {
                continue;
            }

            let mut clues = cells.clone();
            clues.sort_unstable();
            if yielded.contains(&clues) {
                continue;
            }

            let mut affected = Vec::new();
            let mut actions = Vec::new();
            for &pos in &cells {
                let current = grid.get_candidates(pos).expect("pos in house");
                let to_remove = current - digit_set;
                if !to_remove.is_empty() {
                    affected.push(pos);
                    actions.push(Action::RemoveCandidates { pos, set: to_remove });
                }
            }
            if actions.is_empty() {
                continue;
            }
            yielded.push(clues);

            steps.push(SolveStep::new(kind, cells, affected, combo, actions));
        }
    }
    steps
}

pub(super) fn find_hidden_pair(grid: &Grid) -> Vec<SolveStep> {
    find_n(grid, 2, SolveStepKind::HiddenPair)
}

pub(super) fn find_hidden_triple(grid: &Grid) -> Vec<SolveStep> {
    find_n(grid, 3, SolveStepKind::HiddenTriple)
}

pub(super) fn find_hidden_quad(grid: &Grid) -> Vec<SolveStep> {
    find_n(grid, 4, SolveStepKind::HiddenQuad)
}

pub(super) fn find_hidden_quint(grid: &Grid) -> Vec<SolveStep> {
    find_n(grid, 5, SolveStepKind::HiddenQuint)
}
