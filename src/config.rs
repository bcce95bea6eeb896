use crate::error::{ConfigError, Result};

/// Largest grid accepted, in cells (a 8192 × 8192 square)
pub const MAX_CELLS: usize = 1 << 26;

/// Construction parameters of one simulation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    pub num_items: usize,
    pub num_ants: usize,
    /// Sensing radius of every ant
    pub patch_size: u32,
    /// Items each ant remembers
    pub memory_capacity: usize,
    pub iterations: u64,
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            num_items: 40,
            num_ants: 10,
            patch_size: 1,
            memory_capacity: 10,
            iterations: 100,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Number of cells on the grid, if representable
    pub fn capacity(&self) -> Option<usize> {
        self.grid_size.checked_mul(self.grid_size)
    }

    /// Reject configurations that could never be placed
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let capacity = self
            .capacity()
            .filter(|&cells| cells <= MAX_CELLS)
            .ok_or(ConfigError::GridTooLarge(self.grid_size))?;
        if u32::try_from(self.num_ants).is_err() {
            return Err(ConfigError::TooManyAnts(self.num_ants));
        }
        let requested = self.num_ants.saturating_add(self.num_items);
        if requested > capacity {
            return Err(ConfigError::CapacityExceeded {
                requested,
                capacity,
            });
        }
        Ok(())
    }
}
