use crate::grid::{Cell, Grid, Position, Tag};
use tracing::debug;

/// Random draws before falling back to scanning for free cells
const MAX_RANDOM_ATTEMPTS: usize = 64;

/// Pick a uniformly random `Empty` cell, or `None` if the grid is full.
///
/// Samples coordinates until one is free; on crowded grids it gives up after
/// a few collisions and picks among the remaining free cells directly, which
/// keeps the same uniform distribution.
pub fn random_empty_cell(grid: &Grid, rng: &mut fastrand::Rng) -> Option<Position> {
    let size = grid.size();
    if size == 0 {
        return None;
    }

    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let x = rng.usize(..size) as i32;
        let y = rng.usize(..size) as i32;
        if grid.tag(x, y) == Tag::Empty {
            return Some(Position::new(x, y));
        }
    }

    let free: Vec<Position> = grid
        .iter()
        .filter_map(|(pos, cell)| (cell == Cell::Empty).then_some(pos))
        .collect();
    debug!(free = free.len(), "placement fell back to scanning free cells");
    if free.is_empty() {
        None
    } else {
        Some(free[rng.usize(..free.len())])
    }
}
