//! The one `BasicSolve` operation that needs a solving algorithm.
//!
//! `calc_candidates`, `init_candidates`, `find_conflicts`, and `is_solved`
//! live in `sudoku_core::basic_solve` since they only need a [`Grid`].
//! `is_unique` additionally needs an exact-cover search, which lives in this
//! crate (see [`crate::dlx`]) — putting it next to `Grid` would force
//! `sudoku-core` to depend on `sudoku-solver`.

use sudoku_core::Grid;

use crate::dlx;

/// Returns `true` iff `grid` has exactly one conflict-free completion.
///
/// Consumes at most two solutions from [`dlx::solve`].
#[must_use]
pub fn is_unique(grid: &Grid) -> bool {
    let mut solutions = dlx::solve(grid);
    if solutions.next().is_none() {
        return false;
    }
    solutions.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_core::{Position, Shape};

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
    fn test_unique_puzzle() {
        assert!(is_unique(&classic_puzzle()));
    }

    #[test]
    fn test_solved_grid_is_unique() {
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
        assert!(is_unique(&solved));
    }

    #[test]
    fn test_nearly_empty_grid_is_not_unique() {
        let mut grid = Grid::new(Shape::STANDARD);
        grid.set(Position::new(2, 4), 7).unwrap();
        assert!(!is_unique(&grid));
    }

    #[test]
    fn test_conflicting_grid_is_not_unique() {
        let mut grid = Grid::new(Shape::STANDARD);
        grid.set(Position::new(0, 0), 5).unwrap();
        grid.set(Position::new(0, 1), 5).unwrap();
        assert!(!is_unique(&grid));
    }
}
