//! Solve steps: the unit of output for every step finder.
//!
//! The source represents each human technique as its own class in an
//! inheritance hierarchy. Here a step is a single tagged type with
//! `kind` as the discriminant; finders dispatch through [`technique`]'s
//! per-kind function table rather than virtual methods.

use std::cmp::Ordering;

use sudoku_core::{Digit, DigitSet, Grid, GridError, Position};

/// Which technique produced a [`SolveStep`].
///
/// Order here is the fixed pipeline priority from the ratings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStepKind {
    /// Fills in candidates for an empty cell with no candidates set yet.
    CalculateCandidates,
    /// A cell with exactly one candidate.
    NakedSingle,
    /// A digit that can only go in one cell of a house.
    HiddenSingle,
    /// Two cells in a house collectively admitting only two digits.
    NakedPair,
    /// Two digits in a house collectively confined to two cells.
    HiddenPair,
    /// Three cells in a house collectively admitting only three digits.
    NakedTriple,
    /// Three digits in a house collectively confined to three cells.
    HiddenTriple,
    /// Four cells in a house collectively admitting only four digits.
    NakedQuad,
    /// Four digits in a house collectively confined to four cells.
    HiddenQuad,
    /// Five cells in a house collectively admitting only five digits.
    NakedQuint,
    /// Five digits in a house collectively confined to five cells.
    HiddenQuint,
    /// A digit confined to one line within a box, or one box within a line (n=2).
    PointingPair,
    /// Same as [`PointingPair`](Self::PointingPair), but with three occurrences.
    PointingTriple,
    /// Rank-2 basic fish.
    XWing,
    /// Rank-3 basic fish.
    Swordfish,
    /// Rank-4 basic fish.
    Jellyfish,
    /// A placement taken directly from a full search solution.
    Bruteforce,
}

impl SolveStepKind {
    /// The fixed difficulty rating associated with this kind.
    ///
    /// Mirrors the `RATINGS` table: `0` for the bookkeeping
    /// `CalculateCandidates` step, up to `10` for `Bruteforce`.
    #[must_use]
    pub const fn rating(self) -> u32 {
        use SolveStepKind::{
            Bruteforce, CalculateCandidates, HiddenPair, HiddenQuad, HiddenQuint, HiddenSingle,
            HiddenTriple, Jellyfish, NakedPair, NakedQuad, NakedQuint, NakedSingle, NakedTriple,
            PointingPair, PointingTriple, Swordfish, XWing,
        };
        match self {
            CalculateCandidates => 0,
            NakedSingle | HiddenSingle => 1,
            NakedPair | HiddenPair | NakedTriple | HiddenTriple => 2,
            NakedQuad | HiddenQuad | NakedQuint | HiddenQuint => 3,
            PointingPair | PointingTriple => 4,
            XWing => 5,
            Swordfish => 6,
            Jellyfish => 7,
            Bruteforce => 10,
        }
    }
}

/// A single atomic mutation applied to a [`Grid`] as part of a [`SolveStep`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sets a cell's number.
    SetNumber {
        /// The cell to modify.
        pos: Position,
        /// The digit to place.
        value: Digit,
    },
    /// Overwrites a cell's candidate set.
    SetCandidates {
        /// The cell to modify.
        pos: Position,
        /// The candidate set to install.
        set: DigitSet,
    },
    /// Removes digits from a cell's candidate set.
    RemoveCandidates {
        /// The cell to modify.
        pos: Position,
        /// The digits to remove.
        set: DigitSet,
    },
}

impl Action {
    fn apply(&self, grid: &mut Grid) -> Result<(), GridError> {
        match *self {
            Self::SetNumber { pos, value } => grid.set(pos, value.value()),
            Self::SetCandidates { pos, set } => grid.set_candidates(pos, set),
            Self::RemoveCandidates { pos, set } => grid.remove_candidates(pos, set),
        }
    }
}

/// A single inference produced by a step finder: the cells that justify it,
/// the cells and digits it touches, and the atomic mutations that realize it.
///
/// Two steps compare equal (and order) by `(clues, affected, values)` alone;
/// `kind` and `actions` are not part of identity, matching spec §3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStep {
    kind: SolveStepKind,
    clues: Vec<Position>,
    affected: Vec<Position>,
    values: Vec<Digit>,
    actions: Vec<Action>,
}

impl SolveStep {
    /// Builds a step. `clues`, `affected`, and `values` are sorted on construction.
    #[must_use]
    pub fn new(
        kind: SolveStepKind,
        mut clues: Vec<Position>,
        mut affected: Vec<Position>,
        mut values: Vec<Digit>,
        actions: Vec<Action>,
    ) -> Self {
        clues.sort_unstable();
        affected.sort_unstable();
        values.sort_unstable();
        Self {
            kind,
            clues,
            affected,
            values,
            actions,
        }
    }

    /// The technique that produced this step.
    #[must_use]
    pub const fn kind(&self) -> SolveStepKind {
        self.kind
    }

    /// The cells that justify this step, sorted.
    #[must_use]
    pub fn clues(&self) -> &[Position] {
        &self.clues
    }

    /// The cells this step changes or targets, sorted.
    #[must_use]
    pub fn affected(&self) -> &[Position] {
        &self.affected
    }

    /// The digits involved in this step, sorted.
    #[must_use]
    pub fn values(&self) -> &[Digit] {
        &self.values
    }

    /// The atomic mutations this step performs, in order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Applies every action in order to `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if an action addresses an out-of-range cell.
    pub fn apply(&self, grid: &mut Grid) -> Result<(), GridError> {
        for action in &self.actions {
            action.apply(grid)?;
        }
        Ok(())
    }
}

impl PartialOrd for SolveStep {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SolveStep {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.clues, &self.affected, &self.values).cmp(&(
            &other.clues,
            &other.affected,
            &other.values,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_kind_and_actions() {
        let a = SolveStep::new(
            SolveStepKind::NakedSingle,
            vec![Position::new(0, 0)],
            vec![Position::new(0, 1)],
            vec![Digit::new(5)],
            vec![],
        );
        let b = SolveStep::new(
            SolveStepKind::HiddenSingle,
            vec![Position::new(0, 0)],
            vec![Position::new(0, 1)],
            vec![Digit::new(5)],
            vec![Action::SetNumber {
                pos: Position::new(0, 0),
                value: Digit::new(5),
            }],
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_sorts_fields_on_construction() {
        let step = SolveStep::new(
            SolveStepKind::NakedPair,
            vec![Position::new(2, 8), Position::new(2, 5)],
            vec![],
            vec![Digit::new(9), Digit::new(3)],
            vec![],
        );
        assert_eq!(
            step.clues(),
            [Position::new(2, 5), Position::new(2, 8)]
        );
        assert_eq!(step.values(), [Digit::new(3), Digit::new(9)]);
    }

    #[test]
    fn test_rating_table() {
        assert_eq!(SolveStepKind::CalculateCandidates.rating(), 0);
        assert_eq!(SolveStepKind::NakedSingle.rating(), 1);
        assert_eq!(SolveStepKind::HiddenTriple.rating(), 2);
        assert_eq!(SolveStepKind::Jellyfish.rating(), 7);
        assert_eq!(SolveStepKind::Bruteforce.rating(), 10);
    }

    #[test]
    fn test_apply_set_number() {
        let mut grid = Grid::new(sudoku_core::Shape::STANDARD);
        let step = SolveStep::new(
            SolveStepKind::NakedSingle,
            vec![Position::new(0, 0)],
            vec![],
            vec![Digit::new(5)],
            vec![Action::SetNumber {
                pos: Position::new(0, 0),
                value: Digit::new(5),
            }],
        );
        step.apply(&mut grid).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)).unwrap(), 5);
    }
}
