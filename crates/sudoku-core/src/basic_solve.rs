//! Candidate calculation, conflict detection, and solved-state checks.
//!
//! `is_unique` is not defined here: it needs an exact-cover solve, which
//! would create a dependency cycle between this crate and `sudoku-solver`.
//! It lives in `sudoku_solver::basic_solve` instead; see `DESIGN.md`.

use crate::{Digit, DigitSet, Grid, GridError, Position};

/// Computes the candidate set for `pos`.
///
/// If the cell is filled, returns the singleton set containing its value.
/// Otherwise returns `{1..=N}` minus the values of every filled cell in
/// `surrounding_of(pos, include_self = false)`.
///
/// # Errors
///
/// Returns [`GridError::InvalidCoordinate`] if `pos` is out of range.
pub fn calc_candidates(grid: &Grid, pos: Position) -> Result<DigitSet, GridError> {
    let value = grid.get(pos)?;
    if value != 0 {
        return Ok(DigitSet::from_iter_digits([Digit::new(value)]));
    }

    let shape = grid.shape();
    let mut set = DigitSet::full(shape.side());
    for peer in shape.surrounding_of(pos, false) {
        let v = grid.get(peer)?;
        if v != 0 {
            set.remove(Digit::new(v));
        }
    }
    Ok(set)
}

/// Recomputes candidates for every cell via [`calc_candidates`].
///
/// If `filled_only` is true, only filled cells receive their singleton
/// candidate set; empty cells are left untouched.
pub fn init_candidates(grid: &mut Grid, filled_only: bool) {
    let cells: Vec<Position> = grid.all_cells().collect();
    for pos in cells {
        if filled_only && grid.get(pos) == Ok(0) {
            continue;
        }
        let candidates = calc_candidates(grid, pos).expect("pos came from grid.all_cells()");
        grid.set_candidates(pos, candidates)
            .expect("pos came from grid.all_cells()");
    }
}

/// A conflict: two positions in the same house holding the same nonzero value.
pub type Conflict = (Position, Position, u8);

/// Yields every conflicting pair found while scanning `coords` (or the whole
/// grid, if `coords` is empty).
///
/// If scanning the whole grid, the same unordered pair is yielded from both
/// of its endpoints (this duplication is a documented open question in the
/// source material; tests accept either form).
pub fn find_conflicts(grid: &Grid, coords: &[Position]) -> Vec<Conflict> {
    let scanned: Vec<Position> = if coords.is_empty() {
        grid.all_cells().collect()
    } else {
        coords.to_vec()
    };

    let shape = grid.shape();
    let mut out = Vec::new();
    for &pos in &scanned {
        let value = grid.get(pos).unwrap_or(0);
        if value == 0 {
            continue;
        }
        for peer in shape.surrounding_of(pos, false) {
            if grid.get(peer).unwrap_or(0) == value {
                out.push((pos, peer, value));
            }
        }
    }
    out
}

/// Returns `true` if `grid` has no empty cells and no conflicts.
pub fn is_solved(grid: &Grid) -> bool {
    grid.empty().next().is_none() && find_conflicts(grid, &[]).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

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
    fn test_calc_candidates_filled_cell() {
        let grid = classic_puzzle();
        let candidates = calc_candidates(&grid, Position::new(0, 2)).unwrap();
        assert_eq!(candidates.single(), Some(Digit::new(3)));
    }

    #[test]
    fn test_calc_candidates_empty_cell_excludes_peers() {
        let grid = classic_puzzle();
        let candidates = calc_candidates(&grid, Position::new(0, 0)).unwrap();
        // row 0 has 3 at col2, 2 at col4, 6 at col6
        assert!(!candidates.contains(Digit::new(3)));
        assert!(!candidates.contains(Digit::new(2)));
        assert!(!candidates.contains(Digit::new(6)));
    }

    #[test]
    fn test_init_candidates_filled_only() {
        let mut grid = classic_puzzle();
        init_candidates(&mut grid, true);
        // an empty cell is untouched
        assert!(grid
            .get_candidates(Position::new(0, 0))
            .unwrap()
            .is_empty());
        // a filled cell gets its singleton
        assert_eq!(
            grid.get_candidates(Position::new(0, 2)).unwrap().single(),
            Some(Digit::new(3))
        );
    }

    #[test]
    fn test_init_candidates_all_cells() {
        let mut grid = classic_puzzle();
        init_candidates(&mut grid, false);
        assert!(!grid
            .get_candidates(Position::new(0, 0))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_find_conflicts_detects_row_conflict() {
        let shape = Shape::STANDARD;
        let mut grid = Grid::new(shape);
        grid.set(Position::new(0, 0), 5).unwrap();
        grid.set(Position::new(0, 1), 5).unwrap();
        let conflicts = find_conflicts(&grid, &[]);
        assert!(conflicts
            .iter()
            .any(|&(a, b, v)| v == 5 && ((a, b) == (Position::new(0, 0), Position::new(0, 1)))));
    }

    #[test]
    fn test_find_conflicts_no_conflict_on_valid_puzzle() {
        let grid = classic_puzzle();
        assert!(find_conflicts(&grid, &[]).is_empty());
    }

    #[test]
    fn test_is_solved_false_with_empty_cells() {
        let grid = classic_puzzle();
        assert!(!is_solved(&grid));
    }

    #[test]
    fn test_is_solved_true_on_solution() {
        let solution: Grid = "483921657\
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
        assert!(is_solved(&solution));
    }
}
