use crate::grid::cell::{Cell, Position, Tag};

/// Square occupancy map: one `Cell` per coordinate, stored row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid of `size × size` cells.
    ///
    /// # Panics
    /// Panics when [`Grid::try_new`] would fail.
    pub fn new(size: usize) -> Self {
        Self::try_new(size).unwrap_or_else(|| panic!("cannot allocate a grid of size {size}"))
    }

    /// Create an all-empty grid, or `None` when the side leaves the `i32`
    /// coordinate space or the cells cannot be allocated
    pub fn try_new(size: usize) -> Option<Self> {
        i32::try_from(size).ok()?;
        let len = size.checked_mul(size)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, Cell::Empty);
        Some(Self { size, cells })
    }

    /// Side length
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Check whether `(x, y)` lies on the grid
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.size + x as usize)
    }

    /// Occupancy tag at `(x, y)`; anything off the grid reads as `Empty`
    #[inline]
    pub fn tag(&self, x: i32, y: i32) -> Tag {
        self.index(x, y)
            .map_or(Tag::Empty, |idx| self.cells[idx].tag())
    }

    /// Get a cell by position
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos.x, pos.y).map(|idx| self.cells[idx])
    }

    /// Replace the occupant at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is off the grid; callers validate moves first.
    #[inline]
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let idx = self
            .index(pos.x, pos.y)
            .unwrap_or_else(|| panic!("write outside grid at ({}, {})", pos.x, pos.y));
        self.cells[idx] = cell;
    }

    /// Rows from `y = 0` upwards, each a slice of `size` cells
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Cell]> + '_ {
        // chunks() rejects 0, an empty grid simply has no rows
        self.cells.chunks(self.size.max(1))
    }

    /// Every position paired with its cell
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            (Position::new((idx % size) as i32, (idx / size) as i32), cell)
        })
    }

    /// Count cells carrying a given tag
    pub fn count(&self, tag: Tag) -> usize {
        self.cells.iter().filter(|c| c.tag() == tag).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(4);

        assert_eq!(grid.size(), 4);
        assert_eq!(grid.capacity(), 16);
        assert_eq!(grid.count(Tag::Empty), 16);
    }

    #[test]
    fn test_tag_out_of_range_is_empty() {
        let mut grid = Grid::new(3);
        for x in 0..3 {
            for y in 0..3 {
                grid.set(Position::new(x, y), Cell::Item);
            }
        }

        for &(x, y) in &[(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MIN, i32::MAX), (i32::MAX, 1)] {
            assert_eq!(grid.tag(x, y), Tag::Empty, "({x}, {y})");
        }
        assert_eq!(grid.tag(2, 2), Tag::Item);
    }

    #[test]
    fn test_set_and_read_back() {
        let mut grid = Grid::new(5);
        let pos = Position::new(1, 4);

        grid.set(pos, Cell::Both { id: 9, carrying: false });

        assert_eq!(grid.tag(1, 4), Tag::Both);
        assert_eq!(grid.cell(pos), Some(Cell::Both { id: 9, carrying: false }));
        assert_eq!(grid.cell(Position::new(5, 0)), None);
    }

    #[test]
    #[should_panic(expected = "write outside grid")]
    fn test_set_out_of_range_panics() {
        let mut grid = Grid::new(2);
        grid.set(Position::new(2, 0), Cell::Item);
    }

    #[test]
    fn test_iter_positions_match_tags() {
        let mut grid = Grid::new(3);
        grid.set(Position::new(2, 1), Cell::Item);

        let items: Vec<Position> = grid
            .iter()
            .filter(|(_, c)| c.has_item())
            .map(|(p, _)| p)
            .collect();

        assert_eq!(items, vec![Position::new(2, 1)]);
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn test_try_new_rejects_unallocatable_sizes() {
        assert!(Grid::try_new(i32::MAX as usize + 1).is_none());
        assert!(Grid::try_new(usize::MAX).is_none());
        assert_eq!(Grid::try_new(3).map(|g| g.capacity()), Some(9));
    }

    #[test]
    fn test_zero_sized_grid() {
        let grid = Grid::new(0);

        assert_eq!(grid.capacity(), 0);
        assert_eq!(grid.tag(0, 0), Tag::Empty);
        assert_eq!(grid.rows().count(), 0);
    }
}
