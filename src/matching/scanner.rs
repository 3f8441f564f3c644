//! Run scanning.
//!
//! A run is a maximal straight line of equal tokens at least `min_length`
//! long. The scanner makes one pass over the rows and one over the columns
//! and reports horizontal runs (top to bottom, left to right) before
//! vertical runs (left to right, top to bottom).
//!
//! Tokens are compared by equality only. `Empty` and `Bomb` cells form runs
//! like any color does.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Position, Token, DEFAULT_MIN_RUN_LENGTH};
use crate::grid::Grid;

/// Direction of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A maximal straight line of equal tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    /// The shared token.
    pub color: Token,

    /// Cells in scan order (left to right, or top to bottom).
    /// SmallVec keeps typical runs of 3-5 cells off the heap.
    pub cells: SmallVec<[Position; 8]>,
}

impl Run {
    /// Create a run from its token and ordered cells.
    #[must_use]
    pub fn new(color: Token, cells: impl IntoIterator<Item = Position>) -> Self {
        Self {
            color,
            cells: cells.into_iter().collect(),
        }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Direction of the run, read from its first and last cells.
    ///
    /// `None` for runs of fewer than two cells.
    #[must_use]
    pub fn axis(&self) -> Option<Axis> {
        let (first, last) = (self.cells.first()?, self.cells.last()?);
        if first == last {
            None
        } else if first.y == last.y {
            Some(Axis::Horizontal)
        } else {
            Some(Axis::Vertical)
        }
    }

    /// Does the run cover `pos`?
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Cells this run shares with `other`, in this run's order.
    ///
    /// Compares raw positions and makes no assumption about either axis.
    #[must_use]
    pub fn overlap(&self, other: &Run) -> Vec<Position> {
        let mut shared = Vec::new();
        for &a in &self.cells {
            for &b in &other.cells {
                if a == b {
                    shared.push(a);
                }
            }
        }
        shared
    }
}

/// Find every run of at least `min_length` equal tokens.
///
/// A `min_length` of 0 or 1 reports every maximal segment, single cells
/// included.
#[must_use]
pub fn scan(grid: &Grid, min_length: usize) -> Vec<Run> {
    let rows = grid.rows();
    let (width, height) = (grid.width(), grid.height());
    let mut runs = Vec::new();

    for y in 0..height {
        scan_line(&rows, width, min_length, |x| Position::new(x, y), &mut runs);
    }
    for x in 0..width {
        scan_line(&rows, height, min_length, |y| Position::new(x, y), &mut runs);
    }

    runs
}

/// `scan` with the default minimum length of 3.
#[must_use]
pub fn scan_default(grid: &Grid) -> Vec<Run> {
    scan(grid, DEFAULT_MIN_RUN_LENGTH)
}

/// Scan one row or column. `at` maps an offset along the line to a cell.
fn scan_line<F>(rows: &[Vec<Token>], len: usize, min_length: usize, at: F, runs: &mut Vec<Run>)
where
    F: Fn(usize) -> Position,
{
    let token_at = |i: usize| {
        let pos = at(i);
        rows[pos.y][pos.x]
    };

    let mut emit = |end: usize, count: usize| {
        if count >= min_length {
            let run = Run::new(token_at(end - 1), (end - count..end).map(&at));
            trace!(color = %run.color, len = run.len(), start = %run.cells[0], "found run");
            runs.push(run);
        }
    };

    let mut count = 1;
    for i in 1..len {
        if token_at(i) == token_at(i - 1) {
            count += 1;
        } else {
            emit(i, count);
            count = 1;
        }
    }
    // A run touching the end of the line.
    emit(len, count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::parse_grid;

    fn cells(coords: &[(usize, usize)]) -> Vec<Position> {
        coords.iter().map(|&(x, y)| Position::new(x, y)).collect()
    }

    #[test]
    fn test_single_horizontal_run() {
        let grid = parse_grid("RRR").unwrap();
        let runs = scan_default(&grid);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].color, Token::Red);
        assert_eq!(runs[0].cells.to_vec(), cells(&[(0, 0), (1, 0), (2, 0)]));
        assert_eq!(runs[0].axis(), Some(Axis::Horizontal));
    }

    #[test]
    fn test_run_at_end_of_row() {
        let grid = parse_grid("BGRRRR").unwrap();
        let runs = scan_default(&grid);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 4);
        assert_eq!(runs[0].cells[0], Position::new(2, 0));
    }

    #[test]
    fn test_full_row_is_one_run() {
        let grid = parse_grid("YYYYYYY").unwrap();
        let runs = scan_default(&grid);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 7);
    }

    #[test]
    fn test_short_segments_ignored() {
        let grid = parse_grid("RRBBRRB").unwrap();
        assert!(scan_default(&grid).is_empty());
    }

    #[test]
    fn test_vertical_run() {
        let grid = parse_grid(
            "RB
             GB
             RB
             GY",
        )
        .unwrap();
        let runs = scan_default(&grid);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].color, Token::Blue);
        assert_eq!(runs[0].cells.to_vec(), cells(&[(1, 0), (1, 1), (1, 2)]));
        assert_eq!(runs[0].axis(), Some(Axis::Vertical));
    }

    #[test]
    fn test_horizontal_before_vertical() {
        let grid = parse_grid(
            "GBRRR
             GYBYB
             GBYBY",
        )
        .unwrap();
        let runs = scan_default(&grid);

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].axis(), Some(Axis::Horizontal));
        assert_eq!(runs[0].color, Token::Red);
        assert_eq!(runs[1].axis(), Some(Axis::Vertical));
        assert_eq!(runs[1].color, Token::Green);
    }

    #[test]
    fn test_two_runs_in_one_row() {
        let grid = parse_grid("RRRBBBB").unwrap();
        let runs = scan_default(&grid);

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 3);
        assert_eq!(runs[1].len(), 4);
        assert_eq!(runs[1].cells[0], Position::new(3, 0));
    }

    #[test]
    fn test_empty_cells_form_runs() {
        let grid = parse_grid("...R").unwrap();
        let runs = scan_default(&grid);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].color, Token::Empty);
    }

    #[test]
    fn test_custom_min_length() {
        let grid = parse_grid("RRBBB").unwrap();

        assert_eq!(scan(&grid, 2).len(), 2);
        assert_eq!(scan(&grid, 4).len(), 0);
    }

    #[test]
    fn test_min_length_one_covers_every_segment() {
        let grid = parse_grid("RRB").unwrap();
        let runs = scan(&grid, 1);

        // Two horizontal segments plus three single-cell columns.
        assert_eq!(runs.len(), 5);
        assert_eq!(runs[2].axis(), None);
    }

    #[test]
    fn test_overlap() {
        let horizontal = Run::new(Token::Red, cells(&[(0, 1), (1, 1), (2, 1)]));
        let vertical = Run::new(Token::Red, cells(&[(1, 0), (1, 1), (1, 2)]));
        let apart = Run::new(Token::Red, cells(&[(4, 0), (4, 1), (4, 2)]));

        assert_eq!(horizontal.overlap(&vertical), cells(&[(1, 1)]));
        assert!(horizontal.overlap(&apart).is_empty());
        assert!(vertical.contains(Position::new(1, 2)));
        assert!(!vertical.contains(Position::new(2, 2)));
    }
}
