//! Tree visibility and scenic scores over a grid of tree heights.

pub mod error;
pub mod forest;
pub mod grid;
pub mod point;
pub mod report;
pub mod scenic;
pub mod visibility;

pub use error::{Error, Result};
pub use forest::{Forest, Position, TreeHeight};
pub use report::{CellReport, Report};
