//! Parsing moves and grid layouts from text.

use std::str::FromStr;

use super::render::GlyphSet;
use crate::core::{GridError, Move, Position, Token};
use crate::grid::Grid;

/// A move description that doesn't match `x1,y1 x2,y2`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse move from \"{input}\": {reason}")]
pub struct ParseMoveError {
    pub input: String,
    pub reason: &'static str,
}

/// Errors reading an ASCII grid layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseGridError {
    #[error("unknown glyph '{ch}' at line {line}, column {column}")]
    UnknownGlyph { ch: char, line: usize, column: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Parse a move written as `x1,y1 x2,y2`.
///
/// Coordinates are non-negative integers; the two positions are separated by
/// exactly one space. Surrounding whitespace is ignored. Only the syntax is
/// checked here; bounds and legality are the board's concern.
pub fn parse_move(input: &str) -> Result<Move, ParseMoveError> {
    let fail = |reason| ParseMoveError {
        input: input.to_string(),
        reason,
    };

    let (from, to) = input
        .trim()
        .split_once(' ')
        .ok_or_else(|| fail("expected two positions separated by a space"))?;

    let from = parse_position(from).map_err(fail)?;
    let to = parse_position(to).map_err(fail)?;
    Ok(Move::new(from, to))
}

fn parse_position(text: &str) -> Result<Position, &'static str> {
    let (x, y) = text.split_once(',').ok_or("expected a position as x,y")?;
    Ok(Position::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_coordinate(text: &str) -> Result<usize, &'static str> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err("coordinates must be non-negative integers");
    }
    text.parse().map_err(|_| "coordinate is too large")
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

/// Read a grid from ASCII glyphs, one row per line.
///
/// Whitespace inside and around lines is ignored and blank lines are
/// skipped, so layouts can be indented in source code.
///
/// ```
/// use gem_swap::core::{Position, Token};
/// use gem_swap::text::parse_grid;
///
/// let grid = parse_grid("
///     RGB
///     *..
/// ").unwrap();
/// assert_eq!(grid.get(Position::new(0, 1)), Some(Token::Bomb));
/// ```
pub fn parse_grid(text: &str) -> Result<Grid, ParseGridError> {
    let mut rows: Vec<Vec<Token>> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let mut row = Vec::new();
        for (column, ch) in line.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let token = GlyphSet::Ascii
                .token(ch)
                .ok_or(ParseGridError::UnknownGlyph {
                    ch,
                    line: line_no + 1,
                    column: column + 1,
                })?;
            row.push(token);
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(Grid::from_rows(rows)?)
}
