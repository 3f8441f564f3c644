//! Grid store: the 2-D array of tokens underlying every other module.
//!
//! Access is bounds-checked. Out-of-range reads return `None` rather than
//! panicking; callers rely on that to reject moves that leave the board.

pub mod store;

pub use store::Grid;
