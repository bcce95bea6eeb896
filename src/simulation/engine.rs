use crate::ant::{Ant, StepOutcome};
use crate::config::SimConfig;
use crate::error::{ConfigError, Result};
use crate::grid::{Cell, Grid};
use crate::memory::ItemLog;
use crate::render::Renderer;
use crate::simulation::census::{clustering_score, Census};
use crate::simulation::placement::random_empty_cell;
use colored::Colorize;
use std::time::{Duration, Instant};
use tracing::info;

/// Counters accumulated over a run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub iterations: u64,
    /// Moves actually applied
    pub moves: u64,
    /// Times an ant had no free neighbour and stayed put
    pub blocked: u64,
    pub pickups: u64,
    pub drops: u64,
}

/// Owns the grid, the ants and the random source; steps ants in id order
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    ants: Vec<Ant>,
    rng: fastrand::Rng,
    iteration: u64,
    stats: RunStats,
}

impl Simulation {
    /// Build a simulation seeded from `config.seed`, or from entropy
    pub fn new(config: SimConfig) -> Result<Self> {
        let rng = if let Some(seed) = config.seed {
            fastrand::Rng::with_seed(seed)
        } else {
            fastrand::Rng::new()
        };
        Self::with_rng(config, rng)
    }

    /// Validate `config`, then place ants followed by items on free cells
    pub fn with_rng(config: SimConfig, mut rng: fastrand::Rng) -> Result<Self> {
        config.validate()?;
        let mut grid =
            Grid::try_new(config.grid_size).ok_or(ConfigError::GridTooLarge(config.grid_size))?;
        let capacity = grid.capacity();
        let capacity_exceeded = || ConfigError::CapacityExceeded {
            requested: config.num_ants + config.num_items,
            capacity,
        };

        let mut ants = Vec::with_capacity(config.num_ants);
        for id in 0..config.num_ants as u32 {
            let pos = random_empty_cell(&grid, &mut rng).ok_or_else(capacity_exceeded)?;
            let ant = Ant::new(
                id,
                pos,
                config.patch_size,
                ItemLog::with_capacity(config.memory_capacity),
            );
            grid.set(pos, ant.cell(false));
            ants.push(ant);
        }

        for _ in 0..config.num_items {
            let pos = random_empty_cell(&grid, &mut rng).ok_or_else(capacity_exceeded)?;
            grid.set(pos, Cell::Item);
        }

        info!(
            grid_size = config.grid_size,
            ants = config.num_ants,
            items = config.num_items,
            patch_size = config.patch_size,
            "simulation ready"
        );

        Ok(Self {
            config,
            grid,
            ants,
            rng,
            iteration: 0,
            stats: RunStats::default(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Iterations completed so far
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn census(&self) -> Census {
        Census::capture(&self.grid, &self.ants)
    }

    /// One iteration: every ant proposes and applies a move, lowest id first.
    /// Later ants see the moves of earlier ones.
    pub fn step(&mut self) {
        for ant in self.ants.iter_mut() {
            let Some(dir) = ant.propose_move(&self.grid, &mut self.rng) else {
                self.stats.blocked += 1;
                continue;
            };
            self.stats.moves += 1;
            match ant.apply_move(dir, &mut self.grid, &mut self.rng) {
                StepOutcome::PickedUp => self.stats.pickups += 1,
                StepOutcome::Dropped => self.stats.drops += 1,
                StepOutcome::Moved => {}
            }
        }
        self.iteration += 1;
        self.stats.iterations = self.iteration;
    }

    /// Run the configured number of iterations, rendering before the first,
    /// after each one, and once at the end
    pub fn run<R: Renderer>(&mut self, renderer: &mut R) -> Duration {
        renderer.render(self.iteration, &self.grid);

        let sim_start = Instant::now();
        for _ in 0..self.config.iterations {
            self.step();
            renderer.render(self.iteration, &self.grid);
        }
        let elapsed = sim_start.elapsed();

        renderer.finish(self.iteration, &self.grid);
        info!(
            iterations = self.stats.iterations,
            pickups = self.stats.pickups,
            drops = self.stats.drops,
            blocked = self.stats.blocked,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "simulation finished"
        );
        elapsed
    }

    /// Items held in ant memories, and how many ants remember anything
    pub fn remembered(&self) -> (usize, usize) {
        let items = self.ants.iter().map(|a| a.memory().len()).sum();
        let ants = self.ants.iter().filter(|a| !a.memory().is_empty()).count();
        (items, ants)
    }

    /// Print simulation summary
    pub fn print_summary(&self, simulation_time: Duration) {
        let census = self.census();
        let (remembered, rememberers) = self.remembered();
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            simulation_time.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("iterations={}", self.stats.iterations).cyan(),
            format!("ants={}", census.total_ants()).cyan(),
            format!("items={}", census.total_items()).cyan(),
            format!("carried={}", census.carried).cyan(),
        );
        println!(
            "{} {} {} {} {} {}",
            "🐜 Activity:".green().bold(),
            format!("pickups={}", self.stats.pickups).yellow(),
            format!("drops={}", self.stats.drops).yellow(),
            format!("blocked={}", self.stats.blocked).yellow(),
            format!("remembered={remembered}/{rememberers}").yellow(),
            format!("clustering={:.3}", clustering_score(&self.grid)).yellow(),
        );
    }
}
