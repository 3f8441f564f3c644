//! Text front-end helpers: rendering grids and parsing moves and layouts.
//!
//! These sit outside the rules. They only consume the board's public API and
//! produce or read plain strings.

pub mod render;
pub mod parse;

pub use render::{render, render_with, GlyphSet};
pub use parse::{parse_grid, parse_move, ParseGridError, ParseMoveError};
