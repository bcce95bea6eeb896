use crate::config::SimConfig;
use clap::Parser;

/// CLI arguments for the ant clustering simulation
#[derive(Parser, Debug)]
#[command(name = "ant_clustering", about = "🐜 Ants sorting scattered items into clusters")]
pub struct Args {
    /// Side length of the square grid
    #[arg(short = 'g', long, default_value_t = 20)]
    pub grid_size: usize,

    /// Number of items scattered on the grid
    #[arg(short = 'i', long = "items", default_value_t = 40)]
    pub items: usize,

    /// Number of ants
    #[arg(short = 'n', long = "ants", default_value_t = 10)]
    pub ants: usize,

    /// Sensing radius used for the local item density
    #[arg(short = 'p', long, default_value_t = 1)]
    pub patch_size: u32,

    /// Items each ant remembers
    #[arg(short = 'm', long = "memory", default_value_t = 10)]
    pub memory: usize,

    /// Number of iterations
    #[arg(short = 't', long, default_value_t = 100)]
    pub iterations: u64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Draw the grid every N iterations
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub render_every: u64,

    /// Suppress grid snapshots (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Args {
    pub fn to_config(&self) -> SimConfig {
        SimConfig {
            grid_size: self.grid_size,
            num_items: self.items,
            num_ants: self.ants,
            patch_size: self.patch_size,
            memory_capacity: self.memory,
            iterations: self.iterations,
            seed: self.seed,
        }
    }
}
