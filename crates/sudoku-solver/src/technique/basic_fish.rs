//! Basic fish patterns: X-Wing (n=2), Swordfish (n=3), Jellyfish (n=4).
//!
//! For a digit and an orientation (rows as base lines, columns as cover
//! lines, or vice versa), n base lines whose occurrences of the digit all
//! fall within the same n cover lines let the digit be removed from every
//! other cell of those cover lines.

use std::collections::HashSet;

use sudoku_core::{Digit, DigitSet, Grid, Position};

use crate::step::{Action, SolveStep, SolveStepKind};
use crate::technique::combinations;

fn find_oriented(grid: &Grid, digit: Digit, n: usize, kind: SolveStepKind, rows_as_base: bool, steps: &mut Vec<SolveStep>) {
    let shape = grid.shape();
    let side = shape.side();

    let mut base_cells: Vec<Vec<Position>> = Vec::new();
    for i in 0..side {
        let line = if rows_as_base {
            shape.the_row(i)
        } else {
            shape.the_column(i)
        };
        let cells: Vec<Position> = line
            .into_iter()
            .filter(|&pos| grid.get_candidates(pos).expect("pos in line").contains(digit))
            .collect();
        if cells.len() >= 2 && cells.len() <= n {
            base_cells.push(cells);
        }
    }

    let indices: Vec<usize> = (0..base_cells.len()).collect();
    for combo_idx in combinations(&indices, n) {
        let mut union: Vec<Position> = Vec::new();
        for &idx in &combo_idx {
            union.extend(base_cells[idx].iter().copied());
        }
        union.sort_unstable();
        union.dedup();

        let cross = |pos: Position| if rows_as_base { pos.col() } else { pos.row() };
        let mut cover_values: Vec<u8> = Vec::new();
        for &pos in &union {
            let key = cross(pos);
            if !cover_values.contains(&key) {
                cover_values.push(key);
            }
        }
        if cover_values.len() > n {
            continue;
        }
        let all_covered_twice = cover_values
            .iter()
            .all(|&key| union.iter().filter(|&&pos| cross(pos) == key).count() >= 2);
        if !all_covered_twice {
            continue;
        }

        let union_set: HashSet<Position> = union.iter().copied().collect();
        let mut affected = Vec::new();
        let mut actions = Vec::new();
        for &key in &cover_values {
            let cover_line = if rows_as_base {
                shape.the_column(key)
            } else {
                shape.the_row(key)
            };
            for pos in cover_line {
                if union_set.contains(&pos) {
                    continue;
                }
                let current = grid.get_candidates(pos).expect("pos in cover line");
                if current.contains(digit) {
                    affected.push(pos);
                    actions.push(Action::RemoveCandidates {
                        pos,
                        set: DigitSet::from_iter_digits([digit]),
                    });
                }
            }
        }
        if actions.is_empty() {
            continue;
        }
        steps.push(SolveStep::new(kind, union.clone(), affected, vec![digit], actions));
    }
}

fn find_n(grid: &Grid, n: usize, kind: SolveStepKind) -> Vec<SolveStep> {
    let shape = grid.shape();
    let side = shape.side();
    let mut steps = Vec::new();
    for digit in Digit::all(side) {
        find_oriented(grid, digit, n, kind, true, &mut steps);
        find_oriented(grid, digit, n, kind, false, &mut steps);
    }
    steps
}

pub(super) fn find_x_wing(grid: &Grid) -> Vec<SolveStep> {
    find_n(grid, 2, SolveStepKind::XWing)
}

pub(super) fn find_swordfish(grid: &Grid) -> Vec<SolveStep> {
    find_n(grid, 3, SolveStepKind::Swordfish)
}

pub(super) fn find_jellyfish(grid: &Grid) -> Vec<SolveStep> {
    find_n(grid, 4, SolveStepKind::Jellyfish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_core::Shape;

    #[test]
    fn test_x_wing_removes_from_cover_columns() {
        let mut grid = Grid::new(Shape::STANDARD);
        for pos in grid.all_cells() {
            grid.set_candidates(pos, DigitSet::full(9)).unwrap();
        }
        // Confine digit 5 in rows 4 and 8 to columns 1 and 2.
        let five = DigitSet::from_iter_digits([Digit::new(5)]);
        for row in [4u8, 8u8] {
            for col in 0..9u8 {
                if col != 1 && col != 2 {
                    grid.remove_candidates(Position::new(row, col), five).unwrap();
                }
            }
        }

        let steps = find_x_wing(&grid);
        assert!(steps.iter().any(|s| {
            s.values() == [Digit::new(5)]
                && s.clues()
                    == [
                        Position::new(4, 1),
                        Position::new(4, 2),
                        Position::new(8, 1),
                        Position::new(8, 2),
                    ]
                && s.affected().contains(&Position::new(5, 2))
        }));
    }

    #[test]
    fn test_no_x_wing_without_confinement() {
        let mut grid = Grid::new(Shape::STANDARD);
        for pos in grid.all_cells() {
            grid.set_candidates(pos, DigitSet::full(9)).unwrap();
        }
        assert!(find_x_wing(&grid).is_empty());
    }

    #[test]
    fn test_x_wing_documented_scenario() {
        use crate::testing::StepTester;

        let tester = StepTester::from_str(
            "500010070\
             840000000\
             603500000\
             000030005\
             000107000\
             030040210\
             070950400\
             000004502\
             000000900",
        );
        let steps = tester.run(find_x_wing);

        assert!(steps.iter().any(|s| {
            s.clues()
                == [
                    Position::new(4, 1),
                    Position::new(4, 2),
                    Position::new(8, 1),
                    Position::new(8, 2),
                ]
                && s.affected() == [Position::new(5, 2)]
                && s.values() == [Digit::new(5)]
        }));
    }
}
