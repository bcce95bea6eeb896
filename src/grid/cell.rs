/// Grid coordinate; valid positions lie in `[0, size)` on both axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`; may fall off the grid
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Occupancy classification of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Empty,
    Item,
    Ant,
    Both,
}

/// Passive object lying on the grid, identified only by where it lies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub pos: Position,
}

impl Item {
    #[inline]
    pub const fn at(pos: Position) -> Self {
        Self { pos }
    }
}

/// Cell contents. `Both` is an ant standing on an item it has not collected;
/// `carrying` mirrors the standing ant's own carry flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Item,
    Ant { id: u32, carrying: bool },
    Both { id: u32, carrying: bool },
}

impl Cell {
    #[inline]
    pub const fn tag(self) -> Tag {
        match self {
            Cell::Empty => Tag::Empty,
            Cell::Item => Tag::Item,
            Cell::Ant { .. } => Tag::Ant,
            Cell::Both { .. } => Tag::Both,
        }
    }

    /// Id of the ant standing here, if any
    #[inline]
    pub const fn ant(self) -> Option<u32> {
        match self {
            Cell::Ant { id, .. } | Cell::Both { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Whether an uncollected item lies here
    #[inline]
    pub const fn has_item(self) -> bool {
        matches!(self, Cell::Item | Cell::Both { .. })
    }

    /// Whether another ant may step onto this cell
    #[inline]
    pub const fn is_walkable(self) -> bool {
        matches!(self, Cell::Empty | Cell::Item)
    }
}
