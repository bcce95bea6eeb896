use crate::direction::Direction;
use crate::grid::{Cell, Grid, Item, Position, Tag};
use crate::memory::{ItemLog, ItemMemory};
use tracing::{debug, trace};

/// What happened to the ant's load during one applied move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved without changing carry state
    Moved,
    /// Collected the item it stepped onto
    PickedUp,
    /// Left its item on the empty cell it stepped onto
    Dropped,
}

/// Probability that an unladen ant collects an item given local density `λ`
#[inline]
pub fn pickup_probability(density: usize) -> f64 {
    1.0 / (1.0 + density as f64)
}

/// Probability that a carrying ant drops its item given local density `λ`
#[inline]
pub fn drop_probability(density: usize) -> f64 {
    let lambda = density as f64;
    lambda / (1.0 + lambda)
}

/// Active agent: wanders one king step per iteration and moves items around.
///
/// The ant's grid cell is kept in sync with its carry flag: the cell under it
/// is `Ant { carrying }` or, when an uncollected item lies there,
/// `Both { carrying }`.
#[derive(Clone, Debug)]
pub struct Ant<M = ItemLog> {
    pub id: u32,
    pub pos: Position,
    /// Chebyshev radius of the sensing window
    pub patch_size: u32,
    carrying: bool,
    memory: M,
}

impl<M: ItemMemory> Ant<M> {
    /// Create an unladen ant at the given position
    pub fn new(id: u32, pos: Position, patch_size: u32, memory: M) -> Self {
        Self {
            id,
            pos,
            patch_size,
            carrying: false,
            memory,
        }
    }

    /// Check if ant holds an item
    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.carrying
    }

    /// Set carry state; the caller is responsible for updating the grid cell
    #[inline]
    pub fn set_carrying(&mut self, carrying: bool) {
        self.carrying = carrying;
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Cell representing this ant, standing on an item or not
    #[inline]
    pub fn cell(&self, on_item: bool) -> Cell {
        if on_item {
            Cell::Both {
                id: self.id,
                carrying: self.carrying,
            }
        } else {
            Cell::Ant {
                id: self.id,
                carrying: self.carrying,
            }
        }
    }

    /// A target is valid when it is on the grid and holds no ant
    #[inline]
    pub fn is_valid_target(grid: &Grid, x: i32, y: i32) -> bool {
        grid.contains(x, y) && !matches!(grid.tag(x, y), Tag::Ant | Tag::Both)
    }

    /// Pick a uniformly random valid direction, or `None` when boxed in
    pub fn propose_move(&self, grid: &Grid, rng: &mut fastrand::Rng) -> Option<Direction> {
        let mut opts = [Direction::North; 8];
        let mut k = 0usize;

        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let target = self.pos.offset(dx, dy);
            if Self::is_valid_target(grid, target.x, target.y) {
                opts[k] = dir;
                k += 1;
            }
        }

        if k == 0 {
            trace!(ant = self.id, x = self.pos.x, y = self.pos.y, "ant is boxed in");
            None
        } else {
            Some(opts[rng.usize(..k)])
        }
    }

    /// Number of pure `Item` cells in the sensing window around the ant.
    ///
    /// The ant's own cell is part of the window but never reads as `Item`
    /// while the ant stands on it.
    pub fn density(&self, grid: &Grid) -> usize {
        let radius = i32::try_from(self.patch_size).unwrap_or(i32::MAX);
        let last = grid.size() as i32 - 1;
        // Off-grid cells contribute nothing, so clamp the window to the grid
        let x0 = self.pos.x.saturating_sub(radius).max(0);
        let x1 = self.pos.x.saturating_add(radius).min(last);
        let y0 = self.pos.y.saturating_sub(radius).max(0);
        let y1 = self.pos.y.saturating_add(radius).min(last);

        let mut items = 0;
        for x in x0..=x1 {
            for y in y0..=y1 {
                items += (grid.tag(x, y) == Tag::Item) as usize;
            }
        }
        items
    }

    /// Move one step in `dir`, then try to pick up or drop.
    ///
    /// `dir` must come from [`Ant::propose_move`] on the current grid.
    pub fn apply_move(
        &mut self,
        dir: Direction,
        grid: &mut Grid,
        rng: &mut fastrand::Rng,
    ) -> StepOutcome {
        let (dx, dy) = dir.offset();
        let target = self.pos.offset(dx, dy);
        debug_assert!(
            Self::is_valid_target(grid, target.x, target.y),
            "ant {} proposed an invalid move to ({}, {})",
            self.id,
            target.x,
            target.y
        );

        // Departure: an uncollected item stays behind and is remembered
        if grid.tag(self.pos.x, self.pos.y) == Tag::Both {
            grid.set(self.pos, Cell::Item);
            self.memory.record(Item::at(self.pos));
        } else {
            grid.set(self.pos, Cell::Empty);
        }

        // Arrival
        let on_item = grid.tag(target.x, target.y) == Tag::Item;
        self.pos = target;
        grid.set(self.pos, self.cell(on_item));
        trace!(ant = self.id, dir = dir.as_str(), x = target.x, y = target.y, on_item, "ant moved");

        if !self.carrying && on_item {
            let density = self.density(grid);
            if rng.f64() < pickup_probability(density) {
                self.carrying = true;
                grid.set(self.pos, self.cell(false));
                debug!(ant = self.id, x = self.pos.x, y = self.pos.y, density, "picked up item");
                return StepOutcome::PickedUp;
            }
        } else if self.carrying && !on_item {
            let density = self.density(grid);
            if rng.f64() < drop_probability(density) {
                self.carrying = false;
                grid.set(self.pos, self.cell(true));
                debug!(ant = self.id, x = self.pos.x, y = self.pos.y, density, "dropped item");
                return StepOutcome::Dropped;
            }
        }

        StepOutcome::Moved
    }
}
