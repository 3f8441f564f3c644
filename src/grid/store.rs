//! Fixed-size token grid.
//!
//! Cells are stored row-major in an `im::Vector`, so `snapshot()` is an O(1)
//! structural-sharing clone. Writes to a snapshot never reach the original,
//! which is what lets move validation swap tokens speculatively.

use im::Vector;
use serde::Serialize;

use crate::core::{GridError, Palette, Position, Token, TokenSource};

/// A `width` x `height` grid of tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vector<Token>,
}

impl Grid {
    /// Create a grid with every cell `Empty`.
    ///
    /// Fails if either side is zero or the cell count overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: Vector::from(vec![Token::Empty; len]),
        })
    }

    /// Create a grid from rows of tokens, top row first.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Token>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let mut cells = Vector::new();
        for (row, tokens) in rows.into_iter().enumerate() {
            if tokens.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    actual: tokens.len(),
                });
            }
            cells.extend(tokens);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Is the position inside `[0, width) x [0, height)`?
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.y * self.width + pos.x)
    }

    fn out_of_bounds(&self, pos: Position) -> GridError {
        GridError::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        }
    }

    /// Get the token at a position.
    ///
    /// Returns `None` for positions outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Token> {
        self.index(pos).and_then(|i| self.cells.get(i).copied())
    }

    /// Write a token at a position.
    pub fn set(&mut self, pos: Position, token: Token) -> Result<(), GridError> {
        let i = self.index(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        self.cells.set(i, token);
        Ok(())
    }

    /// Exchange the tokens at two positions.
    ///
    /// Both positions are checked before anything is written.
    pub fn swap(&mut self, a: Position, b: Position) -> Result<(), GridError> {
        let i = self.index(a).ok_or_else(|| self.out_of_bounds(a))?;
        let j = self.index(b).ok_or_else(|| self.out_of_bounds(b))?;
        self.cells.swap(i, j);
        Ok(())
    }

    /// An independent copy of this grid.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Fill every cell from `source`, drawing from `palette`.
    ///
    /// Any token outside `palette` is refused with `GridError::OffPalette`
    /// and the grid is left unchanged, so markers and `Empty` never come
    /// out of a fill.
    pub fn randomize<S: TokenSource + ?Sized>(
        &mut self,
        palette: &Palette,
        source: &mut S,
    ) -> Result<(), GridError> {
        let cells = (0..self.cells.len())
            .map(|_| {
                let token = source.next_token(palette);
                if palette.contains(token) {
                    Ok(token)
                } else {
                    Err(GridError::OffPalette(token))
                }
            })
            .collect::<Result<Vector<Token>, _>>()?;
        self.cells = cells;
        Ok(())
    }

    /// All positions, row by row, left to right.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// A copy of the grid as rows of tokens, top row first.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Token>> {
        let tokens: Vec<Token> = self.cells.iter().copied().collect();
        tokens.chunks(self.width).map(<[Token]>::to_vec).collect()
    }

    /// Number of cells holding `token`.
    #[must_use]
    pub fn count(&self, token: Token) -> usize {
        self.cells.iter().filter(|&&t| t == token).count()
    }
}
