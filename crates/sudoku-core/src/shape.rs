//! Board geometry: box dimensions and the row/column/box/part coordinate relations.

use crate::{GridError, Position};

/// The box dimensions of a Sudoku board: width `W`, height `H`, side `N = W*H`.
///
/// All geometric relations (`row_of`, `column_of`, `box_of`, ...) are pure
/// functions of a `Shape` and a [`Position`]; `Shape` itself carries no grid
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
}

impl Shape {
    /// The classic 9x9 board (3x3 boxes).
    pub const STANDARD: Self = Self {
        width: 3,
        height: 3,
    };

    /// Creates a new shape, validating that both dimensions are nonzero.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if `width == 0` or `height == 0`.
    pub const fn new(width: u8, height: u8) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Box width `W`.
    #[must_use]
    pub const fn width(self) -> u8 {
        self.width
    }

    /// Box height `H`.
    #[must_use]
    pub const fn height(self) -> u8 {
        self.height
    }

    /// Side length `N = W*H`.
    #[must_use]
    pub const fn side(self) -> u8 {
        self.width * self.height
    }

    /// Checks that `pos` lies within `[0, N) x [0, N)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if out of range.
    pub const fn check(self, pos: Position) -> Result<(), GridError> {
        let n = self.side();
        if pos.row() >= n || pos.col() >= n {
            return Err(GridError::InvalidCoordinate {
                row: pos.row(),
                col: pos.col(),
                side: n,
            });
        }
        Ok(())
    }

    /// All positions of the grid, in row-major order.
    #[must_use]
    pub fn all_positions(self) -> Vec<Position> {
        let n = self.side();
        let mut out = Vec::with_capacity(usize::from(n) * usize::from(n));
        for row in 0..n {
            for col in 0..n {
                out.push(Position::new(row, col));
            }
        }
        out
    }

    /// The box index `[0, N)` that `pos` belongs to.
    ///
    /// `box_at(r,c) = (c / W) + (r - r mod H)`, matching the spec's geometry.
    #[must_use]
    pub const fn box_at(self, pos: Position) -> u8 {
        (pos.col() / self.width) + (pos.row() - pos.row() % self.height)
    }

    /// All positions sharing `pos`'s row.
    ///
    /// If `include_self` is false, `pos` itself is excluded.
    #[must_use]
    pub fn row_of(self, pos: Position, include_self: bool) -> Vec<Position> {
        (0..self.side())
            .map(|col| Position::new(pos.row(), col))
            .filter(|&p| include_self || p != pos)
            .collect()
    }

    /// All positions sharing `pos`'s column.
    #[must_use]
    pub fn column_of(self, pos: Position, include_self: bool) -> Vec<Position> {
        (0..self.side())
            .map(|row| Position::new(row, pos.col()))
            .filter(|&p| include_self || p != pos)
            .collect()
    }

    /// All positions in `pos`'s H x W box.
    #[must_use]
    pub fn box_of(self, pos: Position, include_self: bool) -> Vec<Position> {
        let top = pos.row() - pos.row() % self.height;
        let left = pos.col() - pos.col() % self.width;
        let mut out = Vec::with_capacity(usize::from(self.side()));
        for dr in 0..self.height {
            for dc in 0..self.width {
                let p = Position::new(top + dr, left + dc);
                if include_self || p != pos {
                    out.push(p);
                }
            }
        }
        out
    }

    /// The union of `row_of`, `column_of` and `box_of`, with duplicates removed.
    ///
    /// The inclusion/exclusion of `pos` itself follows `include_self`.
    #[must_use]
    pub fn surrounding_of(self, pos: Position, include_self: bool) -> Vec<Position> {
        let mut seen = vec![false; usize::from(self.side()) * usize::from(self.side())];
        let mut out = Vec::new();
        let idx = |p: Position| usize::from(p.row()) * usize::from(self.side()) + usize::from(p.col());
        for p in self
            .row_of(pos, true)
            .into_iter()
            .chain(self.column_of(pos, true))
            .chain(self.box_of(pos, true))
        {
            if p == pos && !include_self {
                continue;
            }
            let i = idx(p);
            if !seen[i] {
                seen[i] = true;
                out.push(p);
            }
        }
        out.sort_unstable();
        out
    }

    /// All positions in box `b` (`0 <= b < N`), in the same intra-box order
    /// used by [`the_part`](Self::the_part).
    ///
    /// # Panics
    ///
    /// Panics if `b >= N`.
    #[must_use]
    pub fn the_box(self, b: u8) -> Vec<Position> {
        let n = self.side();
        assert!(b < n, "box index {b} out of range for side {n}");
        let boxes_per_row = n / self.width;
        let top = (b / boxes_per_row) * self.height;
        let left = (b % boxes_per_row) * self.width;
        let mut out = Vec::with_capacity(usize::from(n));
        for dr in 0..self.height {
            for dc in 0..self.width {
                out.push(Position::new(top + dr, left + dc));
            }
        }
        out
    }

    /// All positions in row `r`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= N`.
    #[must_use]
    pub fn the_row(self, r: u8) -> Vec<Position> {
        assert!(r < self.side(), "row {r} out of range");
        (0..self.side()).map(|col| Position::new(r, col)).collect()
    }

    /// All positions in column `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c >= N`.
    #[must_use]
    pub fn the_column(self, c: u8) -> Vec<Position> {
        assert!(c < self.side(), "col {c} out of range");
        (0..self.side()).map(|row| Position::new(row, c)).collect()
    }

    /// The same intra-box offset `p` (`0 <= p < N`) across every box, i.e.
    /// the cell at offset `p` within each of the `N` boxes.
    ///
    /// # Panics
    ///
    /// Panics if `p >= N`.
    #[must_use]
    pub fn the_part(self, p: u8) -> Vec<Position> {
        let n = self.side();
        assert!(p < n, "part {p} out of range");
        let dr = p / self.width;
        let dc = p % self.width;
        let boxes_per_row = n / self.width;
        (0..n)
            .map(|b| {
                let top = (b / boxes_per_row) * self.height;
                let left = (b % boxes_per_row) * self.width;
                Position::new(top + dr, left + dc)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_rejects_zero_dims() {
        assert!(Shape::new(0, 3).is_err());
        assert!(Shape::new(3, 0).is_err());
        assert!(Shape::new(3, 3).is_ok());
    }

    #[test]
    fn test_standard_shape() {
        assert_eq!(Shape::STANDARD.side(), 9);
    }

    #[test]
    fn test_box_at_matches_the_box() {
        let shape = Shape::new(3, 3).unwrap();
        for b in 0..shape.side() {
            for pos in shape.the_box(b) {
                assert_eq!(shape.box_at(pos), b, "pos {pos:?} should be in box {b}");
            }
        }
    }

    #[test]
    fn test_row_column_box_cardinality() {
        let shape = Shape::new(3, 3).unwrap();
        let pos = Position::new(4, 4);
        assert_eq!(shape.row_of(pos, true).len(), 9);
        assert_eq!(shape.row_of(pos, false).len(), 8);
        assert_eq!(shape.column_of(pos, true).len(), 9);
        assert_eq!(shape.box_of(pos, true).len(), 9);
    }

    #[test]
    fn test_surrounding_of_cardinality() {
        // |surrounding_of(include=true)| = 3N - W - H
        let shape = Shape::new(3, 3).unwrap();
        let n = u32::from(shape.side());
        let expected = 3 * n - u32::from(shape.width()) - u32::from(shape.height());
        for pos in shape.all_positions() {
            assert_eq!(shape.surrounding_of(pos, true).len() as u32, expected);
        }
    }

    #[test]
    fn test_surrounding_of_no_duplicates() {
        let shape = Shape::new(2, 3).unwrap();
        for pos in shape.all_positions() {
            let positions = shape.surrounding_of(pos, true);
            let unique: HashSet<_> = positions.iter().collect();
            assert_eq!(unique.len(), positions.len());
        }
    }

    #[test]
    fn test_rectangular_shape_geometry() {
        // W=3, H=2 => N=6
        let shape = Shape::new(3, 2).unwrap();
        assert_eq!(shape.side(), 6);
        assert_eq!(shape.the_box(0).len(), 6);
        assert_eq!(shape.box_at(Position::new(0, 0)), 0);
        assert_eq!(shape.box_at(Position::new(1, 2)), 0);
        assert_eq!(shape.box_at(Position::new(2, 0)), 2);
    }

    #[test]
    fn test_the_part_selects_same_offset_in_every_box() {
        let shape = Shape::new(3, 3).unwrap();
        for p in 0..shape.side() {
            let positions = shape.the_part(p);
            assert_eq!(positions.len(), usize::from(shape.side()));
            for pos in &positions {
                let top = pos.row() - pos.row() % shape.height();
                let left = pos.col() - pos.col() % shape.width();
                let offset = (pos.row() - top) * shape.width() + (pos.col() - left);
                assert_eq!(offset, p);
            }
        }
    }

    #[test]
    fn test_check_rejects_out_of_range() {
        let shape = Shape::new(3, 3).unwrap();
        assert!(shape.check(Position::new(8, 8)).is_ok());
        assert!(shape.check(Position::new(9, 0)).is_err());
        assert!(shape.check(Position::new(0, 9)).is_err());
    }
}
