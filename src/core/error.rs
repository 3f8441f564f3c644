//! Error types.
//!
//! Every error here is recoverable: out-of-range access and illegal moves
//! are reported to the caller, never turned into a panic.

use super::position::{Endpoint, Position};
use super::token::Token;

/// Errors from direct grid access and construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("position {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        pos: Position,
        width: usize,
        height: usize,
    },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{0} is not in the palette and cannot fill the grid")]
    OffPalette(Token),
}

/// Why a proposed swap was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{endpoint} position {pos} is off the board")]
    OutOfBounds { endpoint: Endpoint, pos: Position },

    #[error("positions {from} and {to} are not adjacent")]
    NotAdjacent { from: Position, to: Position },

    #[error("swapping {from} and {to} does not form a run")]
    NoRun { from: Position, to: Position },
}

/// Errors when validating board configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("minimum run length must be at least 2, got {0}")]
    MinRunLength(usize),

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("{0} is reserved and cannot be part of the palette")]
    ReservedToken(Token),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}
