//! Token glyphs and grid rendering.
//!
//! The engine has no opinion on how tokens look; this table is the only
//! place a token is mapped to a symbol.

use crate::core::Token;
use crate::grid::Grid;

/// Every token, in glyph table order.
pub(crate) const TOKENS: [Token; 7] = [
    Token::Red,
    Token::Blue,
    Token::Green,
    Token::Yellow,
    Token::Purple,
    Token::Bomb,
    Token::Empty,
];

/// Symbol set used to draw a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum GlyphSet {
    /// Colored emoji, two columns wide per cell.
    #[default]
    Emoji,
    /// One ASCII character per cell; also what `parse_grid` reads.
    Ascii,
}

impl GlyphSet {
    /// The symbol for a token.
    #[must_use]
    pub const fn glyph(self, token: Token) -> &'static str {
        match self {
            GlyphSet::Emoji => match token {
                Token::Red => "🛑",
                Token::Blue => "🔷",
                Token::Green => "🟩",
                Token::Yellow => "🟡",
                Token::Purple => "💜",
                Token::Bomb => "💣",
                Token::Empty => "  ",
            },
            GlyphSet::Ascii => match token {
                Token::Red => "R",
                Token::Blue => "B",
                Token::Green => "G",
                Token::Yellow => "Y",
                Token::Purple => "P",
                Token::Bomb => "*",
                Token::Empty => ".",
            },
        }
    }

    /// Reverse lookup of a single-character glyph.
    #[must_use]
    pub fn token(self, ch: char) -> Option<Token> {
        let mut buf = [0u8; 4];
        let needle = ch.encode_utf8(&mut buf);
        TOKENS.into_iter().find(|&t| self.glyph(t) == needle)
    }
}

/// Render a grid with emoji glyphs, one line per row.
#[must_use]
pub fn render(grid: &Grid) -> String {
    render_with(grid, GlyphSet::Emoji)
}

/// Render a grid with the given glyph set, one line per row.
#[must_use]
pub fn render_with(grid: &Grid, glyphs: GlyphSet) -> String {
    grid.rows()
        .into_iter()
        .map(|row| row.into_iter().map(|t| glyphs.glyph(t)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
