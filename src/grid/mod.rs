pub mod cell;
pub mod grid;

pub use cell::{Cell, Item, Position, Tag};
pub use grid::Grid;
