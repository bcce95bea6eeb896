use crate::config::MAX_CELLS;
use thiserror::Error;

/// Configuration problems detected before a simulation starts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid side length of zero
    #[error("grid size must be at least 1")]
    EmptyGrid,
    /// Grid with more cells than can be allocated
    #[error("grid size {0} exceeds the maximum of {max} cells", max = MAX_CELLS)]
    GridTooLarge(usize),
    /// More ants than ant ids
    #[error("{0} ants exceed the supported maximum of {max}", max = u32::MAX)]
    TooManyAnts(usize),
    /// More ants and items than the grid has cells
    #[error("{requested} ants and items do not fit on a grid with capacity {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ConfigError>;
