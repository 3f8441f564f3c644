//! Board facade and builder.

use tracing::debug;

use crate::core::{
    BoardConfig, ConfigError, GameRng, GridError, Move, MoveError, Palette, Position, Token, TokenSource,
};
use crate::grid::Grid;
use crate::matching::{find_shapes, Compound, Shape};
use crate::rules::{self, Resolution};

/// A live puzzle board: a grid plus the rules it is played by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    grid: Grid,
}

impl Board {
    /// Create a `width` x `height` board with default rules, filled from
    /// `source`.
    pub fn new<S: TokenSource + ?Sized>(
        width: usize,
        height: usize,
        source: &mut S,
    ) -> Result<Self, ConfigError> {
        Self::with_config(BoardConfig::new(width, height), source)
    }

    /// Create a board from a full configuration, filled from `source`.
    pub fn with_config<S: TokenSource + ?Sized>(
        config: BoardConfig,
        source: &mut S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = Grid::new(config.width, config.height)?;
        grid.randomize(&config.palette, source)?;

        debug!(
            width = config.width,
            height = config.height,
            min_run_length = config.min_run_length,
            "created board"
        );
        Ok(Self { config, grid })
    }

    /// Wrap an existing grid, e.g. a hand-made layout.
    ///
    /// Width and height are taken from the grid; the palette is standard.
    pub fn from_grid(grid: Grid, min_run_length: usize) -> Result<Self, ConfigError> {
        let config =
            BoardConfig::new(grid.width(), grid.height()).with_min_run_length(min_run_length);
        config.validate()?;
        Ok(Self { config, grid })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Read-only view of the grid, for rendering.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The token at `pos`, or `None` off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Token> {
        self.grid.get(pos)
    }

    /// Refill every cell from `source`.
    ///
    /// On `GridError::OffPalette` the board keeps its previous tokens.
    pub fn randomize<S: TokenSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<(), GridError> {
        self.grid.randomize(&self.config.palette, source)
    }

    /// Would this swap be legal? Never mutates the board.
    #[must_use]
    pub fn is_legal_move(&self, mv: Move) -> bool {
        rules::is_legal(&self.grid, mv, self.config.min_run_length)
    }

    /// Apply a swap if legal. Returns false, and changes nothing, otherwise.
    pub fn make_move(&mut self, mv: Move) -> bool {
        self.try_move(mv).is_ok()
    }

    /// Apply a swap if legal, reporting why it was rejected otherwise.
    pub fn try_move(&mut self, mv: Move) -> Result<(), MoveError> {
        rules::apply_move(&mut self.grid, mv, self.config.min_run_length)
    }

    /// Current matches, without changing the board.
    #[must_use]
    pub fn shapes(&self) -> Vec<Shape> {
        find_shapes(&self.grid, self.config.min_run_length)
    }

    /// Current compound shapes only.
    #[must_use]
    pub fn compounds(&self) -> Vec<Compound> {
        self.shapes()
            .into_iter()
            .filter_map(|shape| match shape {
                Shape::Compound(compound) => Some(compound),
                Shape::Run(_) => None,
            })
            .collect()
    }

    /// Clear all current matches.
    pub fn resolve(&mut self) -> Resolution {
        rules::resolve(&mut self.grid, self.config.min_run_length)
    }

    /// Every legal swap on the current board.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.grid, self.config.min_run_length)
    }
}

/// Builder for a seeded `Board`.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    config: BoardConfig,
    seed: u64,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            config: BoardConfig::default(),
            seed: 42,
        }
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.config.height = height;
        self
    }

    pub fn min_run_length(mut self, length: usize) -> Self {
        self.config.min_run_length = length;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.config.palette = palette;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the board, filling it from a `GameRng` with the chosen seed.
    pub fn build(self) -> Result<Board, ConfigError> {
        Board::with_config(self.config, &mut GameRng::new(self.seed))
    }
}
