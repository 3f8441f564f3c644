//! Resolution: clearing matched cells.
//!
//! Compounds are cleared first. Every cell of every member run becomes
//! `Empty`, then each intersection becomes a `Bomb`. Standalone runs are
//! cleared afterwards. Nothing falls and nothing is refilled; cleared cells
//! stay `Empty`.

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

use crate::core::{Position, Token};
use crate::grid::Grid;
use crate::matching::{find_shapes, Shape};

/// Outcome of one resolution step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Shapes that were cleared, in merge order.
    pub shapes: Vec<Shape>,

    /// Matched cells left `Empty`.
    pub cleared: usize,

    /// Matched cells turned into markers.
    pub markers: usize,
}

impl Resolution {
    /// Did anything match?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Clear every shape currently on the grid.
pub fn resolve(grid: &mut Grid, min_length: usize) -> Resolution {
    let shapes = find_shapes(grid, min_length);
    if shapes.is_empty() {
        return Resolution::default();
    }

    let mut touched: FxHashSet<Position> = FxHashSet::default();

    for shape in shapes.iter().filter(|s| s.is_compound()) {
        for pos in shape.cells() {
            write(grid, pos, Token::Empty, &mut touched);
        }
        for &pos in shape.intersections() {
            write(grid, pos, Token::Bomb, &mut touched);
        }
    }

    for shape in shapes.iter().filter(|s| !s.is_compound()) {
        for pos in shape.cells() {
            write(grid, pos, Token::Empty, &mut touched);
        }
    }

    let cleared = touched
        .iter()
        .filter(|&&pos| grid.get(pos) == Some(Token::Empty))
        .count();
    let markers = touched
        .iter()
        .filter(|&&pos| grid.get(pos) == Some(Token::Bomb))
        .count();

    debug!(shapes = shapes.len(), cleared, markers, "resolved matches");

    Resolution {
        shapes,
        cleared,
        markers,
    }
}

/// Shape cells come from a scan of this grid, so writes stay in bounds.
fn write(grid: &mut Grid, pos: Position, token: Token, touched: &mut FxHashSet<Position>) {
    let written = grid.set(pos, token);
    debug_assert!(written.is_ok(), "shape cell {pos} outside the grid");
    if written.is_ok() {
        touched.insert(pos);
    }
}
