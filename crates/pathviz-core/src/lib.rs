//! **pathviz-core**: grid model for the pathfinding visualiser.
//!
//! This crate provides the data types shared by every other member of the
//! workspace: `(row, col)` coordinates, grid dimensions, the four cell kinds
//! and the [`Grid`] that holds them. It carries no algorithmic logic.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use error::GridError;
pub use geom::{Coord, CoordIter, GridSize};
pub use grid::{Grid, GridIter};
