pub mod disjoint_set;
pub mod gen;
pub mod grid;

pub use grid::{Direction, Edge, Grid};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("size of the board must be positive (got {0})")]
    InvalidSize(usize),
}
