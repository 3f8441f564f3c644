//! The public facade of the engine.
//!
//! A `Board` owns the live grid and its configuration and exposes the
//! operations a front end needs:
//! - `is_legal_move` / `make_move` / `try_move` to play swaps
//! - `shapes` / `compounds` to inspect current matches
//! - `resolve` to clear them
//! - `legal_moves` for hints
//!
//! Supports any board size and minimum run length of at least 2.

mod game;

pub use game::{Board, BoardBuilder};
