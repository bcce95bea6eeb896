//! # Ant Clustering
//!
//! A Deneubourg-style ant clustering simulation.
//!
//! Ants wander a bounded square grid one king step at a time, picking up
//! isolated items and dropping them where items are already dense. Over many
//! iterations scattered items gather into clusters.

pub mod ant;
pub mod cli;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod memory;
pub mod render;
pub mod simulation;

pub use ant::{drop_probability, pickup_probability, Ant, StepOutcome};
pub use cli::Args;
pub use config::SimConfig;
pub use direction::Direction;
pub use error::{ConfigError, Result};
pub use grid::{Cell, Grid, Item, Position, Tag};
pub use memory::{ItemLog, ItemMemory};
pub use render::{ConsoleRenderer, NullRenderer, Renderer};
pub use simulation::{Census, RunStats, Simulation};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, Cell, ConfigError, ConsoleRenderer, Direction, Grid, NullRenderer, Position,
        Renderer, Result, SimConfig, Simulation, Tag,
    };
}
