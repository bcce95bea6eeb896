use crate::ant::Ant;
use crate::grid::{Grid, Tag};
use crate::memory::ItemMemory;

/// Snapshot of how the grid is occupied
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub empty: usize,
    pub items: usize,
    pub ants: usize,
    pub both: usize,
    /// Items held by ants rather than lying on the grid
    pub carried: usize,
}

impl Census {
    pub fn capture<M: ItemMemory>(grid: &Grid, ants: &[Ant<M>]) -> Self {
        Census {
            empty: grid.count(Tag::Empty),
            items: grid.count(Tag::Item),
            ants: grid.count(Tag::Ant),
            both: grid.count(Tag::Both),
            carried: ants.iter().filter(|a| a.is_carrying()).count(),
        }
    }

    /// Items on the grid plus items in transit
    pub fn total_items(&self) -> usize {
        self.items + self.both + self.carried
    }

    /// Ants standing on the grid, on items or not
    pub fn total_ants(&self) -> usize {
        self.ants + self.both
    }
}

/// Mean number of item-bearing king neighbours per item-bearing cell.
///
/// Zero when nothing lies on the grid; rises as items gather into clumps.
pub fn clustering_score(grid: &Grid) -> f64 {
    let mut cells = 0usize;
    let mut neighbours = 0usize;
    for (pos, cell) in grid.iter() {
        if !cell.has_item() {
            continue;
        }
        cells += 1;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if (dx, dy) == (0, 0) {
                    continue;
                }
                let n = pos.offset(dx, dy);
                neighbours += matches!(grid.tag(n.x, n.y), Tag::Item | Tag::Both) as usize;
            }
        }
    }
    if cells == 0 {
        0.0
    } else {
        neighbours as f64 / cells as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Position};
    use crate::memory::ItemLog;

    #[test]
    fn test_census_counts_tags_and_carried_items() {
        let mut grid = Grid::new(3);
        let mut carrier = Ant::new(0, Position::new(0, 0), 1, ItemLog::default());
        carrier.set_carrying(true);
        grid.set(carrier.pos, carrier.cell(false));
        let idle = Ant::new(1, Position::new(1, 1), 1, ItemLog::default());
        grid.set(idle.pos, idle.cell(true));
        grid.set(Position::new(2, 2), Cell::Item);

        let census = Census::capture(&grid, &[carrier, idle]);

        assert_eq!(census.empty, 6);
        assert_eq!(census.items, 1);
        assert_eq!(census.ants, 1);
        assert_eq!(census.both, 1);
        assert_eq!(census.carried, 1);
        assert_eq!(census.total_items(), 3);
        assert_eq!(census.total_ants(), 2);
    }

    #[test]
    fn test_clustering_score() {
        let mut scattered = Grid::new(5);
        scattered.set(Position::new(0, 0), Cell::Item);
        scattered.set(Position::new(4, 4), Cell::Item);
        assert_eq!(clustering_score(&scattered), 0.0);

        let mut clumped = Grid::new(5);
        clumped.set(Position::new(1, 1), Cell::Item);
        clumped.set(Position::new(1, 2), Cell::Both { id: 0, carrying: false });
        assert_eq!(clustering_score(&clumped), 1.0);

        assert_eq!(clustering_score(&Grid::new(3)), 0.0);
    }
}
