//! Pointing n-tuples: a digit confined to one line within a box, or one box
//! within a line.

use sudoku_core::{Digit, DigitSet, Grid, Position, Shape};

use crate::step::{Action, SolveStep, SolveStepKind};

fn emit(grid: &Grid, kind: SolveStepKind, clues: &[Position], line: &[Position], digit: Digit, steps: &mut Vec<SolveStep>) {
    let mut affected = Vec::new();
    let mut actions = Vec::new();
    for &pos in line {
        if clues.contains(&pos) {
            continue;
        }
        let current = grid.get_candidates(pos).expect("pos in line");
        if current.contains(digit) {
            affected.push(pos);
            actions.push(Action::RemoveCandidates {
                pos,
                set: DigitSet::from_iter_digits([digit]),
            });
        }
    }
    if actions.is_empty() {
        return;
    }
    steps.push(SolveStep::new(
        kind,
        clues.to_vec(),
        affected,
        vec![digit],
        actions,
    ));
}

fn find_box_to_line(grid: &Grid, shape: Shape, n: usize, kind: SolveStepKind, steps: &mut Vec<SolveStep>) {
    let side = shape.side();
    for b in 0..side {
        let box_cells = shape.the_box(b);
        for digit in Digit::all(side) {
            let occ: Vec<Position> = box_cells
                .iter()
                .copied()
                .filter(|&pos| grid.get_candidates(pos).expect("pos in box").contains(digit))
                .collect();
            if occ.len() != n {
                continue;
            }
            if occ.iter().all(|p| p.row() == occ[0].row()) {
                let line = shape.the_row(occ[0].row());
                emit(grid, kind, &occ, &line, digit, steps);
            }
            if occ.iter().all(|p| p.col() == occ[0].col()) {
                let line = shape.the_column(occ[0].col());
                emit(grid, kind, &occ, &line, digit, steps);
            }
        }
    }
}

fn find_line_to_box(grid: &Grid, shape: Shape, line: &[Position], n: usize, kind: SolveStepKind, steps: &mut Vec<SolveStep>) {
    let side = shape.side();
    for digit in Digit::all(side) {
        let occ: Vec<Position> = line
            .iter()
            .copied()
            .filter(|&pos| grid.get_candidates(pos).expect("pos in line").contains(digit))
            .collect();
        if occ.len() != n {
            continue;
        }
        let b0 = shape.box_at(occ[0]);
        if occ.iter().all(|&p| shape.box_at(p) == b0) {
            let box_cells = shape.the_box(b0);
            emit(grid, kind, &occ, &box_cells, digit, steps);
        }
    }
}

fn find_n(grid: &Grid, n: usize, kind: SolveStepKind) -> Vec<SolveStep> {
    let shape = grid.shape();
    let side = shape.side();
    let mut steps = Vec::new();

    find_box_to_line(grid, shape, n, kind, &mut steps);
    for r in 0..side {
        find_line_to_box(grid, shape, &shape.the_row(r), n, kind, &mut steps);
    }
    for c in 0..side {
        find_line_to_box(grid, shape, &shape.the_column(c), n, kind, &mut steps);
    }

    steps
}

pub(super) fn find_pointing_pair(grid: &Grid) -> Vec<SolveStep> {
    find_n(grid, 2, SolveStepKind::PointingPair)
}

pub(super) fn find_pointing_triple(grid: &Grid) -> Vec<SolveStep> {
    find_n(grid, 3, SolveStepKind::PointingTriple)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointing_pair_box_to_row() {
        let mut grid = Grid::new(Shape::STANDARD);
        for pos in grid.all_cells() {
            grid.set_candidates(pos, DigitSet::full(9)).unwrap();
        }
        // Confine digit 6 within box 0 to (0,0) and (0,1): removed everywhere
        // else in the box, including the rest of row 0's share of the box.
        grid.remove_candidates(
            Position::new(0, 2),
            DigitSet::from_iter_digits([Digit::new(6)]),
        )
        .unwrap();
        for row in 1..3 {
            for col in 0..3 {
                grid.remove_candidates(
                    Position::new(row, col),
                    DigitSet::from_iter_digits([Digit::new(6)]),
                )
                .unwrap();
            }
        }

        let steps = find_pointing_pair(&grid);
        assert!(steps.iter().any(|s| {
            s.values() == [Digit::new(6)]
                && s.clues() == [Position::new(0, 0), Position::new(0, 1)]
                && s.affected().contains(&Position::new(0, 5))
        }));
    }
}
