//! MRV backtracking solver: the brute-force fallback.
//!
//! The source recurses through a generator, picking the empty cell with the
//! fewest remaining candidates at each level and restoring saved candidate
//! state on the way back out. Since nothing here suspends mid-function on
//! stable Rust, the search is an explicit stack of frames (one per
//! recursion level), each holding the cell being tried, its remaining
//! candidates, and the candidate sets saved before eliminating from peers.

use sudoku_core::{
    basic_solve::{find_conflicts, init_candidates},
    Digit, DigitSet, Grid, Position,
};

struct Frame {
    pos: Position,
    remaining: Vec<Digit>,
    /// Set when a candidate from `remaining` is currently placed on the grid,
    /// holding what must be restored to undo it.
    placed: Option<PlacedCandidate>,
}

struct PlacedCandidate {
    peers: Vec<(Position, DigitSet)>,
}

fn pick_mrv_cell(grid: &Grid) -> Option<Position> {
    grid.empty()
        .min_by_key(|&pos| grid.get_candidates(pos).expect("pos came from grid.empty()").len())
}

fn push_frame(grid: &Grid, stack: &mut Vec<Frame>) -> bool {
    let Some(pos) = pick_mrv_cell(grid) else {
        return false;
    };
    let candidates = grid
        .get_candidates(pos)
        .expect("pos came from grid.empty()");
    let mut remaining: Vec<Digit> = candidates.iter().collect();
    remaining.reverse();
    stack.push(Frame {
        pos,
        remaining,
        placed: None,
    });
    true
}

fn place(grid: &mut Grid, pos: Position, digit: Digit) -> PlacedCandidate {
    let shape = grid.shape();
    let mut peers = Vec::new();
    for peer in shape.surrounding_of(pos, false) {
        let before = grid.get_candidates(peer).expect("peer in range");
        peers.push((peer, before));
        grid.remove_candidates(peer, DigitSet::from_iter_digits([digit]))
            .expect("peer in range");
    }
    grid.set(pos, digit.value()).expect("pos in range");
    PlacedCandidate { peers }
}

fn unplace(grid: &mut Grid, pos: Position, placed: PlacedCandidate) {
    for (peer, candidates) in placed.peers {
        grid.set_candidates(peer, candidates).expect("peer in range");
    }
    grid.set(pos, 0).expect("pos in range");
}

/// A lazy, resumable stream of completed, conflict-free solutions.
///
/// Created by [`bruteforce`]. Each item is a fully filled grid.
pub struct Solutions {
    grid: Grid,
    stack: Vec<Frame>,
    root_done: bool,
    dead: bool,
}

impl Solutions {
    fn empty() -> Self {
        Self {
            grid: Grid::new(sudoku_core::Shape::STANDARD),
            stack: Vec::new(),
            root_done: true,
            dead: true,
        }
    }
}

impl Iterator for Solutions {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        if self.dead {
            return None;
        }
        loop {
            if self.stack.is_empty() {
                if self.root_done {
                    self.dead = true;
                    return None;
                }
                self.root_done = true;
                if !push_frame(&self.grid, &mut self.stack) {
                    // already fully solved with no search at all
                    return Some(self.grid.clone());
                }
                continue;
            }

            let frame = self.stack.last_mut().expect("checked non-empty");
            if let Some(placed) = frame.placed.take() {
                unplace(&mut self.grid, frame.pos, placed);
            }

            let Some(digit) = frame.remaining.pop() else {
                self.stack.pop();
                continue;
            };
            let pos = frame.pos;
            let placed = place(&mut self.grid, pos, digit);
            self.stack
                .last_mut()
                .expect("just matched Some above")
                .placed = Some(placed);

            if push_frame(&self.grid, &mut self.stack) {
                continue;
            }
            return Some(self.grid.clone());
        }
    }
}

/// Solves `grid` via MRV backtracking, yielding completed, conflict-free grids.
///
/// If `grid` already has a conflict among its filled cells, the returned
/// iterator yields nothing (fail fast, per spec).
#[must_use]
pub fn bruteforce(grid: &Grid) -> Solutions {
    if !find_conflicts(grid, &[]).is_empty() {
        return Solutions::empty();
    }

    let mut working = grid.copy(false);
    init_candidates(&mut working, false);

    Solutions {
        grid: working,
        stack: Vec::new(),
        root_done: false,
        dead: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_core::Shape;

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
    fn test_solves_classic_puzzle() {
        let grid = classic_puzzle();
        let solution = bruteforce(&grid).next().expect("puzzle has a solution");
        let expected: Grid = "483921657\
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
        assert_eq!(solution, expected);
    }

    #[test]
    fn test_conflicting_input_yields_nothing() {
        let mut grid = Grid::new(Shape::STANDARD);
        grid.set(Position::new(0, 0), 5).unwrap();
        grid.set(Position::new(0, 1), 5).unwrap();
        assert!(bruteforce(&grid).next().is_none());
    }

    #[test]
    fn test_empty_grid_has_multiple_solutions() {
        let grid = Grid::new(Shape::STANDARD);
        let solutions: Vec<_> = bruteforce(&grid).take(2).collect();
        assert_eq!(solutions.len(), 2);
        assert_ne!(solutions[0], solutions[1]);
    }

    #[test]
    fn test_nearly_empty_grid_is_not_unique() {
        let mut grid = Grid::new(Shape::STANDARD);
        grid.set(Position::new(2, 4), 7).unwrap();
        let solutions: Vec<_> = bruteforce(&grid).take(2).collect();
        assert_eq!(solutions.len(), 2);
    }

    #[test]
    fn test_already_solved_grid_yields_itself() {
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
        let solution = bruteforce(&solved).next().unwrap();
        assert_eq!(solution, solved);
    }
}
