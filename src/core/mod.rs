//! Core engine types: tokens, positions, moves, errors, RNG, configuration.
//!
//! Everything else in the crate is built from these. None of them know
//! about grids or matching.

pub mod token;
pub mod position;
pub mod error;
pub mod rng;
pub mod config;

pub use token::{Palette, Token};
pub use position::{Endpoint, Move, Position};
pub use error::{ConfigError, GridError, MoveError};
pub use rng::{GameRng, GameRngState, SequenceSource, TokenSource};
pub use config::{BoardConfig, DEFAULT_MIN_RUN_LENGTH};
