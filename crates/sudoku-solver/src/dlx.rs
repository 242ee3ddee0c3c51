//! Exact-cover solving via Algorithm X, dancing-links style select/deselect.
//!
//! Grounded directly on Ali Assaf's `dlx.py` (MIT-licensed, as credited in
//! its own docstring): four constraint families (cell, row-digit,
//! column-digit, box-digit) cover a 0/1 matrix whose rows are `(row, col,
//! digit)` triples; a solution is a set of rows covering every column
//! exactly once.
//!
//! The source keeps `X` as a dict of column -> set of covering rows. This
//! implementation keeps the same hash-map-of-sets representation rather
//! than an intrusive dancing-links node arena (see `DESIGN.md`): the
//! covering-property restoration contract (`select`/`deselect` are exact
//! inverses) is what the spec actually requires, and the arena layout is
//! only a performance note.

use std::collections::{HashMap, HashSet};

use sudoku_core::{Digit, Grid, Position, Shape};

/// One of the four exact-cover constraint families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Column {
    /// Cell `(r,c)` holds exactly one digit.
    Rc(Position),
    /// Row `r` contains digit `v` exactly once.
    Rn(u8, Digit),
    /// Column `c` contains digit `v` exactly once.
    Cn(u8, Digit),
    /// Box `b` contains digit `v` exactly once.
    Bn(u8, Digit),
}

/// A candidate placement: row id `(r, c, v)` in the exact-cover matrix.
type RowKey = (Position, Digit);

type ColumnMap = HashMap<Column, HashSet<RowKey>>;
type RowMap = HashMap<RowKey, [Column; 4]>;

fn build_matrix(shape: Shape) -> (ColumnMap, RowMap) {
    let n = shape.side();
    let mut y: RowMap = HashMap::new();
    for pos in shape.all_positions() {
        for digit in Digit::all(n) {
            let b = shape.box_at(pos);
            y.insert(
                (pos, digit),
                [
                    Column::Rc(pos),
                    Column::Rn(pos.row(), digit),
                    Column::Cn(pos.col(), digit),
                    Column::Bn(b, digit),
                ],
            );
        }
    }

    let mut x: ColumnMap = HashMap::new();
    for (&row, cols) in &y {
        for &col in cols {
            x.entry(col).or_default().insert(row);
        }
    }
    (x, y)
}

fn try_select(x: &mut ColumnMap, y: &RowMap, row: RowKey) -> Option<Vec<HashSet<RowKey>>> {
    let cols = y.get(&row)?;
    if cols.iter().any(|c| !x.contains_key(c)) {
        return None;
    }
    Some(select(x, y, row, cols))
}

fn select(x: &mut ColumnMap, y: &RowMap, row: RowKey, cols: &[Column; 4]) -> Vec<HashSet<RowKey>> {
    let mut saved = Vec::with_capacity(4);
    for &j in cols {
        let covering: Vec<RowKey> = x[&j].iter().copied().collect();
        for i in covering {
            for &k in &y[&i] {
                if k != j {
                    if let Some(set) = x.get_mut(&k) {
                        set.remove(&i);
                    }
                }
            }
        }
        saved.push(x.remove(&j).expect("checked present by caller"));
        let _ = row;
    }
    saved
}

fn deselect(x: &mut ColumnMap, y: &RowMap, row: RowKey, mut saved: Vec<HashSet<RowKey>>) {
    let cols = &y[&row];
    for &j in cols.iter().rev() {
        let set = saved.pop().expect("one saved set per column");
        for &i in &set {
            for &k in &y[&i] {
                if k != j {
                    x.entry(k).or_default().insert(i);
                }
            }
        }
        x.insert(j, set);
    }
}

struct Frame {
    candidates: Vec<RowKey>,
    active: Option<(RowKey, Vec<HashSet<RowKey>>)>,
}

fn push_frame(x: &ColumnMap, stack: &mut Vec<Frame>) {
    let col = x
        .iter()
        .min_by_key(|(_, rows)| rows.len())
        .map(|(&col, _)| col)
        .expect("caller checked x is non-empty");
    let candidates: Vec<RowKey> = x[&col].iter().copied().collect();
    stack.push(Frame {
        candidates,
        active: None,
    });
}

/// A lazy, resumable stream of exact-cover solutions.
///
/// Created by [`solve`]. Each item is a complete grid: a copy of the
/// original grid's numbers with every empty cell filled in.
pub struct DlxSolutions {
    base: Grid,
    x: ColumnMap,
    y: RowMap,
    solution: Vec<RowKey>,
    stack: Vec<Frame>,
    root_done: bool,
    conflict: bool,
}

impl DlxSolutions {
    fn next_solution(&mut self) -> Option<Vec<RowKey>> {
        if self.conflict {
            return None;
        }
        loop {
            if self.stack.is_empty() {
                if self.root_done {
                    return None;
                }
                self.root_done = true;
                if self.x.is_empty() {
                    return Some(self.solution.clone());
                }
                push_frame(&self.x, &mut self.stack);
                continue;
            }

            let frame = self.stack.last_mut().expect("checked non-empty");
            if let Some((row, saved)) = frame.active.take() {
                deselect(&mut self.x, &self.y, row, saved);
                self.solution.pop();
            }

            let Some(row) = frame.candidates.pop() else {
                self.stack.pop();
                continue;
            };
            let cols = self.y[&row];
            let saved = select(&mut self.x, &self.y, row, &cols);
            self.solution.push(row);
            self.stack
                .last_mut()
                .expect("just matched Some above")
                .active = Some((row, saved));

            if self.x.is_empty() {
                return Some(self.solution.clone());
            }
            push_frame(&self.x, &mut self.stack);
        }
    }
}

impl Iterator for DlxSolutions {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        let triples = self.next_solution()?;
        let mut result = self.base.copy(false);
        for (pos, digit) in triples {
            result
                .set(pos, digit.value())
                .expect("pos was built from the grid's own shape");
        }
        Some(result)
    }
}

/// Solves `grid` with Algorithm X over the RC/RN/CN/BN exact-cover matrix.
///
/// Pre-filled cells are covered before the search begins; if two pre-filled
/// cells already conflict, the returned iterator yields nothing.
#[must_use]
pub fn solve(grid: &Grid) -> DlxSolutions {
    let shape = grid.shape();
    let (mut x, y) = build_matrix(shape);

    let mut conflict = false;
    for pos in grid.filled() {
        let value = grid.get(pos).expect("pos came from grid.filled()");
        let row = (pos, Digit::new(value));
        if try_select(&mut x, &y, row).is_none() {
            conflict = true;
            break;
        }
    }

    DlxSolutions {
        base: grid.copy(false),
        x,
        y,
        solution: Vec::new(),
        stack: Vec::new(),
        root_done: false,
        conflict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
        let solution = solve(&grid).next().expect("puzzle has a solution");
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
    fn test_conflict_yields_nothing() {
        let mut grid = Grid::new(Shape::STANDARD);
        grid.set(Position::new(0, 0), 5).unwrap();
        grid.set(Position::new(0, 1), 5).unwrap();
        assert!(solve(&grid).next().is_none());
    }

    #[test]
    fn test_empty_grid_has_many_solutions() {
        let grid = Grid::new(Shape::STANDARD);
        let solutions: Vec<_> = solve(&grid).take(2).collect();
        assert_eq!(solutions.len(), 2);
        assert_ne!(solutions[0], solutions[1]);
    }

    #[test]
    fn test_rectangular_shape() {
        let grid: Grid = "123456\
             630001\
             500002\
             462513\
             314625\
             251364"
            .parse()
            .unwrap();
        let expected: Grid = "123456\
             635241\
             546132\
             462513\
             314625\
             251364"
            .parse()
            .unwrap();
        let solution = solve(&grid).next().unwrap();
        assert_eq!(solution, expected);
    }
}
