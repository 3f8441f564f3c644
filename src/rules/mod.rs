//! Game rules over a grid.
//!
//! - `validator`: legality of swaps and applying them
//! - `resolver`: clearing matched shapes
//!
//! Both take the minimum run length explicitly; the board passes the value
//! from its `BoardConfig`.

pub mod validator;
pub mod resolver;

pub use validator::{apply_move, check_move, is_legal, legal_moves};
pub use resolver::{resolve, Resolution};
