//! Tokens and the playable palette.
//!
//! ## Token
//!
//! Every grid cell holds exactly one `Token`. Five of them are playable
//! colors; `Bomb` is the reserved marker produced only by resolution and
//! `Empty` is what a cleared cell holds. Tokens compare by value only.
//!
//! ## Palette
//!
//! The list of colors random generation draws from. Always non-empty and
//! never contains `Bomb` or `Empty`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// A single cell value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    /// Marker left on intersection cells when a compound shape resolves.
    Bomb,
    /// A cleared cell.
    #[default]
    Empty,
}

impl Token {
    /// All playable colors, in declaration order.
    pub const PLAYABLE: [Token; 5] = [
        Token::Red,
        Token::Blue,
        Token::Green,
        Token::Yellow,
        Token::Purple,
    ];

    /// Can this token be produced by random generation?
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Token::Bomb | Token::Empty)
    }

    /// Is this the reserved marker token?
    #[must_use]
    pub const fn is_marker(self) -> bool {
        matches!(self, Token::Bomb)
    }

    /// Is this cell cleared?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Token::Empty)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Token::Red => "red",
            Token::Blue => "blue",
            Token::Green => "green",
            Token::Yellow => "yellow",
            Token::Purple => "purple",
            Token::Bomb => "bomb",
            Token::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// Colors available to random generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Token>", into = "Vec<Token>")]
pub struct Palette {
    tokens: Vec<Token>,
}

impl Palette {
    /// Create a palette from an explicit token list.
    ///
    /// Fails if the list is empty or contains a non-playable token.
    pub fn new(tokens: Vec<Token>) -> Result<Self, ConfigError> {
        if tokens.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if let Some(&reserved) = tokens.iter().find(|t| !t.is_playable()) {
            return Err(ConfigError::ReservedToken(reserved));
        }
        Ok(Self { tokens })
    }

    /// All five playable colors.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            tokens: Token::PLAYABLE.to_vec(),
        }
    }

    /// The tokens in this palette. Never empty.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Is `token` one of this palette's colors?
    #[must_use]
    pub fn contains(&self, token: Token) -> bool {
        self.tokens.contains(&token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Token>> for Palette {
    type Error = ConfigError;

    fn try_from(tokens: Vec<Token>) -> Result<Self, Self::Error> {
        Self::new(tokens)
    }
}

impl From<Palette> for Vec<Token> {
    fn from(palette: Palette) -> Self {
        palette.tokens
    }
}
