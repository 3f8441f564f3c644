//! # gem-swap
//!
//! Rule engine for a swap-based tile-matching puzzle.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: The engine holds the grid, validates swaps, finds
//!    matches and clears them. Drawing the board and reading input are left
//!    to front ends (see `text` for simple ones).
//!
//! 2. **Injected Randomness**: Boards are filled from a `TokenSource` passed
//!    in by the caller. A seeded `GameRng` reproduces the same board; a
//!    `SequenceSource` gives exact layouts in tests.
//!
//! 3. **Recoverable Errors**: Out-of-range positions and illegal moves are
//!    reported as values. Nothing in the engine panics on bad input.
//!
//! ## Architecture
//!
//! - **Snapshots**: The grid lives in a persistent vector (`im-rs`), so move
//!   validation swaps tokens on an O(1) copy instead of the live board.
//!
//! - **Single-pass merging**: Overlapping runs are grouped in one forward
//!   pass over scan order. Only direct overlaps with the run that started a
//!   group are followed.
//!
//! ## Modules
//!
//! - `core`: Tokens, positions, moves, errors, RNG, configuration
//! - `grid`: Bounds-checked token storage
//! - `matching`: Run scanning and shape merging
//! - `rules`: Move validation and match resolution
//! - `board`: The `Board` facade tying it together
//! - `text`: Glyph rendering and move parsing for text front ends
//!
//! ## Example
//!
//! ```
//! use gem_swap::{BoardBuilder, Move, Position};
//!
//! let mut board = BoardBuilder::new().width(8).height(8).seed(7).build().unwrap();
//!
//! // Two cells apart is never legal
//! let far = Move::new(Position::new(0, 0), Position::new(2, 0));
//! assert!(!board.is_legal_move(far));
//! assert!(!board.make_move(far));
//!
//! for mv in board.legal_moves() {
//!     assert!(board.is_legal_move(mv));
//! }
//! ```

pub mod core;
pub mod grid;
pub mod matching;
pub mod rules;
pub mod board;
pub mod text;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, ConfigError, Endpoint, GameRng, GameRngState, GridError, Move, MoveError,
    Palette, Position, SequenceSource, Token, TokenSource, DEFAULT_MIN_RUN_LENGTH,
};

pub use crate::grid::Grid;

pub use crate::matching::{find_shapes, merge, scan, Axis, Compound, Run, Shape};

pub use crate::rules::Resolution;

pub use crate::board::{Board, BoardBuilder};
