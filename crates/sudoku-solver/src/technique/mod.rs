//! Human-technique step finders.
//!
//! Each submodule is one finder: a pure function `Grid -> Vec<SolveStep>`
//! that never mutates its input. The source gives each technique its own
//! class in an inheritance hierarchy with `find`/`build_actions` methods;
//! here the tagged [`SolveStep`](crate::step::SolveStep) replaces the class
//! hierarchy, and [`all_finders`] is the "small per-kind function table"
//! the design notes call for, dispatched by [`crate::pipeline`].

use sudoku_core::{Grid, Shape};

use crate::step::{SolveStep, SolveStepKind};

mod basic_fish;
mod bruteforce;
mod calculate_candidates;
mod hidden_single;
mod hidden_tuple;
mod naked_single;
mod naked_tuple;
mod pointing_tuple;

/// A step finder, as a plain function pointer: no per-finder state, so no
/// trait object is needed.
pub type FinderFn = fn(&Grid) -> Vec<SolveStep>;

/// All finders in fixed pipeline priority order (spec's ratings table order).
#[must_use]
pub fn all_finders() -> Vec<(SolveStepKind, FinderFn)> {
    vec![
        (SolveStepKind::CalculateCandidates, calculate_candidates::find),
        (SolveStepKind::NakedSingle, naked_single::find),
        (SolveStepKind::HiddenSingle, hidden_single::find),
        (SolveStepKind::NakedPair, naked_tuple::find_naked_pair),
        (SolveStepKind::HiddenPair, hidden_tuple::find_hidden_pair),
        (SolveStepKind::NakedTriple, naked_tuple::find_naked_triple),
        (SolveStepKind::HiddenTriple, hidden_tuple::find_hidden_triple),
        (SolveStepKind::NakedQuad, naked_tuple::find_naked_quad),
        (SolveStepKind::HiddenQuad, hidden_tuple::find_hidden_quad),
        (SolveStepKind::NakedQuint, naked_tuple::find_naked_quint),
        (SolveStepKind::HiddenQuint, hidden_tuple::find_hidden_quint),
        (SolveStepKind::PointingPair, pointing_tuple::find_pointing_pair),
        (SolveStepKind::PointingTriple, pointing_tuple::find_pointing_triple),
        (SolveStepKind::XWing, basic_fish::find_x_wing),
        (SolveStepKind::Swordfish, basic_fish::find_swordfish),
        (SolveStepKind::Jellyfish, basic_fish::find_jellyfish),
        (SolveStepKind::Bruteforce, bruteforce::find),
    ]
}

/// All houses of `shape`: every row, then every column, then every box.
pub(crate) fn all_houses(shape: Shape) -> Vec<Vec<sudoku_core::Position>> {
    let n = shape.side();
    let mut houses = Vec::with_capacity(3 * usize::from(n));
    for r in 0..n {
        houses.push(shape.the_row(r));
    }
    for c in 0..n {
        houses.push(shape.the_column(c));
    }
    for b in 0..n {
        houses.push(shape.the_box(b));
    }
    houses
}

/// All size-`k` combinations of `items`, preserving relative order.
pub(crate) fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if items.len() < k {
        return Vec::new();
    }
    let mut result = Vec::new();
    for i in 0..=(items.len() - k) {
        for mut rest in combinations(&items[i + 1..], k - 1) {
            let mut combo = Vec::with_capacity(k);
            combo.push(items[i].clone());
            combo.append(&mut rest);
            result.push(combo);
        }
    }
    result
}
