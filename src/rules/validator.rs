//! Move validation.
//!
//! A swap is legal when both positions are on the board, the positions are
//! 4-directional neighbours, and the grid would contain at least one run
//! after the swap. The check runs on a snapshot and never touches the live
//! grid.

use tracing::debug;

use crate::core::{Endpoint, GridError, Move, MoveError, Position};
use crate::grid::Grid;
use crate::matching::scan;

/// Check a move, reporting why it is illegal.
pub fn check_move(grid: &Grid, mv: Move, min_length: usize) -> Result<(), MoveError> {
    for endpoint in [Endpoint::Source, Endpoint::Destination] {
        let pos = mv.endpoint(endpoint);
        if grid.get(pos).is_none() {
            return Err(MoveError::OutOfBounds { endpoint, pos });
        }
    }

    if !mv.from.is_adjacent(mv.to) {
        return Err(MoveError::NotAdjacent {
            from: mv.from,
            to: mv.to,
        });
    }

    let mut snapshot = grid.snapshot();
    snapshot
        .swap(mv.from, mv.to)
        .map_err(|err| endpoint_error(mv, err))?;

    if scan(&snapshot, min_length).is_empty() {
        return Err(MoveError::NoRun {
            from: mv.from,
            to: mv.to,
        });
    }
    Ok(())
}

/// Is the move legal? Pure predicate over `grid`.
#[must_use]
pub fn is_legal(grid: &Grid, mv: Move, min_length: usize) -> bool {
    check_move(grid, mv, min_length).is_ok()
}

/// Validate a move and, if legal, swap the two tokens on the live grid.
///
/// An illegal move leaves the grid untouched.
pub fn apply_move(grid: &mut Grid, mv: Move, min_length: usize) -> Result<(), MoveError> {
    if let Err(err) = check_move(grid, mv, min_length) {
        debug!(%mv, %err, "rejected move");
        return Err(err);
    }

    grid.swap(mv.from, mv.to)
        .map_err(|err| endpoint_error(mv, err))?;
    debug!(%mv, "applied move");
    Ok(())
}

/// Every legal swap, each unordered pair once.
///
/// Pairs are listed row by row, each cell paired with its right neighbour
/// before its lower neighbour.
#[must_use]
pub fn legal_moves(grid: &Grid, min_length: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    for pos in grid.positions() {
        let neighbours = [
            Position::new(pos.x + 1, pos.y),
            Position::new(pos.x, pos.y + 1),
        ];
        for next in neighbours {
            let mv = Move::new(pos, next);
            if grid.contains(next) && is_legal(grid, mv, min_length) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Attribute a grid bounds error to the side of the move it came from.
fn endpoint_error(mv: Move, err: GridError) -> MoveError {
    let pos = match err {
        GridError::OutOfBounds { pos, .. } => pos,
        GridError::InvalidDimensions { .. }
        | GridError::RaggedRows { .. }
        | GridError::OffPalette(_) => mv.from,
    };
    let endpoint = if pos == mv.from {
        Endpoint::Source
    } else {
        Endpoint::Destination
    };
    MoveError::OutOfBounds { endpoint, pos }
}
