//! The Sudoku grid: numbers and candidates over a [`Shape`].

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, DigitSet, GridError, Position, Shape};

/// A Sudoku board: a `Shape`, a number per cell (`0` = empty), and an
/// independent candidate set per cell.
///
/// Per the data model, `candidates` is *not* automatically kept in sync with
/// `numbers` — algorithms that rely on candidates must call
/// [`init_candidates`](crate::basic_solve::init_candidates) (or otherwise
/// populate them) first. Equality compares `numbers` only.
#[derive(Debug, Clone)]
pub struct Grid {
    shape: Shape,
    numbers: Vec<u8>,
    candidates: Vec<DigitSet>,
}

impl Grid {
    /// Creates an empty grid (all cells `0`, all candidate sets empty).
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        let cells = usize::from(shape.side()) * usize::from(shape.side());
        Self {
            shape,
            numbers: vec![0; cells],
            candidates: vec![DigitSet::EMPTY; cells],
        }
    }

    /// The board's shape.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    fn index(&self, pos: Position) -> Result<usize, GridError> {
        self.shape.check(pos)?;
        let n = usize::from(self.shape.side());
        Ok(usize::from(pos.row()) * n + usize::from(pos.col()))
    }

    /// Returns the number at `pos` (`0` means empty).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if `pos` is out of range.
    pub fn get(&self, pos: Position) -> Result<u8, GridError> {
        Ok(self.numbers[self.index(pos)?])
    }

    /// Sets the number at `pos` (`0` clears the cell).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if `pos` is out of range.
    pub fn set(&mut self, pos: Position, value: u8) -> Result<(), GridError> {
        let idx = self.index(pos)?;
        self.numbers[idx] = value;
        Ok(())
    }

    /// Returns the candidate set at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if `pos` is out of range.
    pub fn get_candidates(&self, pos: Position) -> Result<DigitSet, GridError> {
        Ok(self.candidates[self.index(pos)?])
    }

    /// Overwrites the candidate set at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if `pos` is out of range.
    pub fn set_candidates(&mut self, pos: Position, set: DigitSet) -> Result<(), GridError> {
        let idx = self.index(pos)?;
        self.candidates[idx] = set;
        Ok(())
    }

    /// Removes every digit in `set` from the candidates at `pos`.
    ///
    /// Digits absent from the current candidate set are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if `pos` is out of range.
    pub fn remove_candidates(&mut self, pos: Position, set: DigitSet) -> Result<(), GridError> {
        let idx = self.index(pos)?;
        self.candidates[idx] = self.candidates[idx] - set;
        Ok(())
    }

    /// All cells, in row-major order.
    pub fn all_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.shape.all_positions().into_iter()
    }

    /// Cells whose number is `0`.
    pub fn empty(&self) -> impl Iterator<Item = Position> + '_ {
        self.all_cells().filter(|&p| self.get(p) == Ok(0))
    }

    /// Cells whose number is nonzero.
    pub fn filled(&self) -> impl Iterator<Item = Position> + '_ {
        self.all_cells().filter(|&p| self.get(p) != Ok(0))
    }

    /// A deep copy of this grid.
    ///
    /// If `include_candidates` is false, the copy's candidate sets are all
    /// empty regardless of this grid's state.
    #[must_use]
    pub fn copy(&self, include_candidates: bool) -> Self {
        Self {
            shape: self.shape,
            numbers: self.numbers.clone(),
            candidates: if include_candidates {
                self.candidates.clone()
            } else {
                vec![DigitSet::EMPTY; self.numbers.len()]
            },
        }
    }

    /// Yields every position whose number differs between `self` and `other`.
    ///
    /// Grids are expected to share the same shape.
    pub fn diff<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = Position> + 'a {
        self.all_cells()
            .filter(move |&p| self.get(p) != other.get(p))
    }
}

impl PartialEq for Grid {
    /// Compares `numbers` only; candidates are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.numbers == other.numbers
    }
}

impl Eq for Grid {}

/// Errors that can occur when parsing a [`Grid`] from its string format.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The field section's length is not a perfect square, so no side
    /// length `N` can be inferred.
    #[display("field section length {_0} is not a perfect square")]
    NotPerfectSquare(#[error(not(source))] usize),
    /// The field section contains a token that is not a valid digit.
    #[display("invalid field token '{_0}'")]
    InvalidFieldToken(#[error(not(source))] String),
    /// The candidate section's cell count does not match the field section's.
    #[display("candidate section has {actual} cells, expected {expected}")]
    CandidateCellCountMismatch {
        /// Number of candidate-list cells actually found.
        actual: usize,
        /// Number of cells implied by the field section.
        expected: usize,
    },
    /// A candidate list contained a token that is not a valid digit.
    #[display("invalid candidate token '{_0}'")]
    InvalidCandidateToken(#[error(not(source))] String),
    /// The inferred shape was rejected by [`Shape::new`].
    #[display("{_0}")]
    Shape(GridError),
}

/// Infers `(width, height)` from a perfect-square cell count `n*n`, choosing
/// the largest divisor `w` of `n` with `w <= sqrt(n)`.
///
/// The square root is verified by squaring back, to avoid floating-point
/// drift (the only use of floating point in this crate).
fn infer_shape(cell_count: usize) -> Result<Shape, GridParseError> {
    let approx = (cell_count as f64).sqrt().round() as usize;
    // the float sqrt is only a hint; confirm (or correct) it by squaring in
    // integer arithmetic so no floating-point error can leak into the result
    let n = [approx.saturating_sub(1), approx, approx + 1]
        .into_iter()
        .find(|&c| c * c == cell_count)
        .ok_or(GridParseError::NotPerfectSquare(cell_count))?;
    let n_u8 = u8::try_from(n).map_err(|_| GridParseError::NotPerfectSquare(cell_count))?;

    // largest divisor of n with w*w <= n, found by plain integer comparison
    let width = (1..=n_u8)
        .rev()
        .find(|&w| u32::from(w) * u32::from(w) <= u32::from(n_u8) && n_u8 % w == 0)
        .unwrap_or(1);
    let height = n_u8 / width;
    Shape::new(width, height).map_err(GridParseError::Shape)
}

fn parse_token(token: &str) -> Result<u8, ()> {
    match token {
        "." | "_" | "0" => Ok(0),
        _ => token.parse::<u8>().map_err(|_| ()),
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses the grid string format: `N*N` whitespace-tolerant field
    /// tokens, optionally followed by `|` and a comma-separated,
    /// row-major candidate list per cell (digits concatenated within a
    /// cell for `N <= 9`, space-separated otherwise).
    ///
    /// The side length `N` is inferred from the field section alone (the
    /// auto-sizing rule in the spec): `(W, H)` is chosen so `W*H = N` and
    /// `W` is the largest divisor of `N` with `W <= sqrt(N)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field_part, candidate_part) = match s.split_once('|') {
            Some((f, c)) => (f, Some(c)),
            None => (s, None),
        };

        let field_tokens: Vec<u8> = if field_part.split_whitespace().count() > 1 {
            field_part
                .split_whitespace()
                .map(|tok| parse_token(tok).map_err(|()| GridParseError::InvalidFieldToken(tok.to_owned())))
                .collect::<Result<_, _>>()?
        } else {
            field_part
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    parse_token(&c.to_string())
                        .map_err(|()| GridParseError::InvalidFieldToken(c.to_string()))
                })
                .collect::<Result<_, _>>()?
        };

        let shape = infer_shape(field_tokens.len())?;
        let mut grid = Self::new(shape);
        for (pos, value) in grid.shape.all_positions().into_iter().zip(&field_tokens) {
            grid.numbers[grid.index(pos).expect("position from own shape")] = *value;
        }

        if let Some(candidate_part) = candidate_part {
            let cells: Vec<&str> = candidate_part.split(',').map(str::trim).collect();
            let positions = grid.shape.all_positions();
            if cells.len() != positions.len() {
                return Err(GridParseError::CandidateCellCountMismatch {
                    actual: cells.len(),
                    expected: positions.len(),
                });
            }
            for (pos, cell) in positions.into_iter().zip(cells) {
                let digits: Vec<&str> = if cell.split_whitespace().count() > 1 {
                    cell.split_whitespace().collect()
                } else {
                    // single-character digits, contiguous (N <= 9)
                    cell.split_terminator("")
                        .filter(|s| !s.is_empty())
                        .collect()
                };
                let mut set = DigitSet::EMPTY;
                for d in digits {
                    let v: u8 = d
                        .parse()
                        .map_err(|_| GridParseError::InvalidCandidateToken(d.to_owned()))?;
                    if v > 0 {
                        set.insert(Digit::new(v));
                    }
                }
                grid.set_candidates(pos, set).expect("position from own shape");
            }
        }

        Ok(grid)
    }
}

impl Grid {
    /// Writes the field section: row-major digit tokens (`.` for empty).
    ///
    /// Cells for boards with `side() <= 9` are concatenated with no
    /// separator; wider boards are whitespace-separated, since a token like
    /// `10` would otherwise be ambiguous with its neighbors. Newlines are
    /// inserted between rows (in place of the usual separator) when
    /// `alternate` is set, mirroring [`FromStr`]'s whitespace tolerance.
    fn write_field(&self, f: &mut fmt::Formatter<'_>, alternate: bool) -> fmt::Result {
        let n = usize::from(self.shape.side());
        let wide = n > 9;
        for (i, pos) in self.all_cells().enumerate() {
            if i > 0 && wide && !(alternate && i % n == 0) {
                write!(f, " ")?;
            }
            let v = self.get(pos).unwrap_or(0);
            if v == 0 {
                write!(f, ".")?;
            } else {
                write!(f, "{v}")?;
            }
            if alternate && (i + 1) % n == 0 && i + 1 != n * n {
                writeln!(f)?;
            }
        }
        Ok(())
    }

    /// Renders both the field and candidate sections, `|`-separated, in the
    /// exact format [`FromStr`] parses: a comma-joined, row-major candidate
    /// list, each cell's digits concatenated for `side() <= 9` boards and
    /// space-separated otherwise, in ascending order.
    ///
    /// `decode(grid.to_string_with_candidates())` round-trips both the
    /// numbers and the candidates; plain [`Display`] round-trips the numbers
    /// only.
    #[must_use]
    pub fn to_string_with_candidates(&self) -> String {
        let n = usize::from(self.shape.side());
        let wide = n > 9;
        let mut out = self.to_string();
        out.push('|');
        let cells: Vec<String> = self
            .all_cells()
            .map(|pos| {
                let digits: Vec<String> = self
                    .get_candidates(pos)
                    .unwrap_or(DigitSet::EMPTY)
                    .iter()
                    .map(|d| d.value().to_string())
                    .collect();
                if wide {
                    digits.join(" ")
                } else {
                    digits.join("")
                }
            })
            .collect();
        out.push_str(&cells.join(","));
        out
    }
}

impl Display for Grid {
    /// Renders the field section only; see [`Grid::to_string_with_candidates`]
    /// for a format that round-trips candidates too.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_field(f, f.alternate())
    }
}
