//! The fixed-priority driver that runs finders to closure, plus rating/scoring.
//!
//! Adapts `TechniqueSolver`'s "reset to the first technique on progress, else
//! advance" loop to step-producing finders: each finder yields a batch of
//! independent steps instead of mutating the grid itself, so the loop applies
//! every step from a finder's batch (reporting each one first) before
//! deciding whether to restart.

use sudoku_core::{basic_solve::init_candidates, Grid};

use crate::step::SolveStep;
use crate::technique::all_finders;

/// Solves `grid` by running finders to closure, returning the resulting grid
/// and the full log of steps applied, in order.
///
/// If `report` is supplied, it is invoked with each step just before that
/// step is applied to the working grid.
#[must_use]
pub fn solve(grid: &Grid, mut report: Option<&mut dyn FnMut(&SolveStep)>) -> (Grid, Vec<SolveStep>) {
    let mut working = grid.copy(false);
    init_candidates(&mut working, true);

    let finders = all_finders();
    let mut log = Vec::new();

    'outer: loop {
        for (_, finder) in &finders {
            let steps = finder(&working);
            if steps.is_empty() {
                continue;
            }
            for step in &steps {
                if let Some(callback) = report.as_deref_mut() {
                    callback(step);
                }
                step.apply(&mut working)
                    .expect("a finder only targets cells within its own grid's shape");
                log.push(step.clone());
            }
            continue 'outer;
        }
        break;
    }

    (working, log)
}

/// The puzzle's difficulty: the hardest rating among the steps `solve` needed.
///
/// `0` if the grid was already fully determined at entry (no steps needed).
#[must_use]
pub fn rate(grid: &Grid) -> u32 {
    let (_, log) = solve(grid, None);
    log.iter().map(|step| step.kind().rating()).max().unwrap_or(0)
}

/// The puzzle's score: the sum of ratings over every step `solve` needed.
#[must_use]
pub fn score(grid: &Grid) -> u32 {
    let (_, log) = solve(grid, None);
    log.iter().map(|step| step.kind().rating()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_core::{basic_solve::is_solved, Shape};

    fn classic_puzzle() -> Grid {
        "003020600\
         900305001\
         001806400\
         008102900\
         700000008\
         006708200\
         002609500\
         800203009\
         005010300"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_solve_fully_solves_classic_puzzle() {
        let (solved, log) = solve(&classic_puzzle(), None);
        assert!(is_solved(&solved));
        assert!(!log.is_empty());
    }

    #[test]
    fn test_solve_reports_every_logged_step() {
        let mut reported = Vec::new();
        {
            let mut callback = |step: &SolveStep| reported.push(step.clone());
            let (_, log) = solve(&classic_puzzle(), Some(&mut callback));
            assert_eq!(reported.len(), log.len());
        }
    }

    #[test]
    fn test_rate_is_zero_for_already_solved_grid() {
        let solved: Grid = "483921657\
             967345821\
             251876493\
             548132976\
             729564138\
             136798245\
             372689514\
             814253769\
             695417382"
            .parse()
            .unwrap();
        assert_eq!(rate(&solved), 0);
    }

    #[test]
    fn test_score_is_sum_of_log_ratings() {
        let (_, log) = solve(&classic_puzzle(), None);
        let expected: u32 = log.iter().map(|step| step.kind().rating()).sum();
        assert_eq!(score(&classic_puzzle()), expected);
    }

    #[test]
    fn test_empty_grid_needs_bruteforce() {
        let grid = Grid::new(Shape::STANDARD);
        let (solved, log) = solve(&grid, None);
        assert!(is_solved(&solved));
        assert!(log.iter().any(|s| s.kind() == crate::step::SolveStepKind::Bruteforce));
    }
}
