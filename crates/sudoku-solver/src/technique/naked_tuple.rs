//! Naked n-tuples: n cells in a house collectively admitting only n digits.

use sudoku_core::{DigitSet, Grid, Position};

use crate::step::{Action, SolveStep, SolveStepKind};
use crate::technique::{all_houses, combinations};

fn find_n(grid: &Grid, n: usize, kind: SolveStepKind) -> Vec<SolveStep> {
    let shape = grid.shape();
    let mut steps = Vec::new();
    let mut yielded: Vec<Vec<Position>> = Vec::new();

    for house in all_houses(shape) {
        let narrow: Vec<Position> = house
            .iter()
            .copied()
            .filter(|&pos| {
                let len = grid.get_candidates(pos).expect("pos in house").len() as usize;
                (2..=n).contains(&len)
            })
            .collect();

        for combo in combinations(&narrow, n) {
            let mut union = DigitSet::EMPTY;
            for &pos in &combo {
                union = union | grid.get_candidates(pos).expect("pos in house");
            }
            if union.len() as usize > n {
                continue;
            }

            let mut clues = combo.clone();
            clues.sort_unstable();
            if yielded.contains(&clues) {
                continue;
            }

            let mut affected = Vec::new();
            let mut actions = Vec::new();
            for &pos in &house {
                if combo.contains(&pos) {
                    continue;
                }
                let current = grid.get_candidates(pos).expect("pos in house");
                let to_remove = current & union;
                if !to_remove.is_empty() {
                    affected.push(pos);
                    actions.push(Action::RemoveCandidates { pos, set: to_remove });
                }
            }
            if actions.is_empty() {
                continue;
            }
            yielded.push(clues);

            steps.push(SolveStep::new(
                kind,
                combo,
                affected,
                union.iter().collect(),
                actions,
            ));
        }
    }
    steps
}

pub(super) fn find_naked_pair(grid: &Grid) -> Vec<SolveStep> {
    find_n(grid, 2, SolveStepKind::NakedPair)
}

pub(super) fn find_naked_triple(grid: &Grid) -> Vec<SolveStep> {
    find_n(grid, 3, SolveStepKind::NakedTriple)
}

pub(super) fn find_naked_quad(grid: &Grid) -> Vec<SolveStep> {
    find_n(grid, 4, SolveStepKind::NakedQuad)
}

pub(super) fn find_naked_quint(grid: &Grid) -> Vec<SolveStep> {
    find_n(grid, 5, SolveStepKind::NakedQuint)
}
