pub mod census;
pub mod engine;
pub mod placement;

pub use census::{clustering_score, Census};
pub use engine::{RunStats, Simulation};
pub use placement::random_empty_cell;
