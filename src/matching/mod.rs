//! Match detection: run scanning and shape merging.
//!
//! - `scanner`: maximal horizontal and vertical runs of equal tokens
//! - `shape`: groups overlapping runs into compound shapes
//!
//! Both are pure functions of a grid snapshot. Results are recomputed on
//! demand and never stored on the board.

pub mod scanner;
pub mod shape;

pub use scanner::{scan, scan_default, Axis, Run};
pub use shape::{find_shapes, merge, Compound, Shape};
