//! **gridstar-core**: the grid model used by the gridstar pathfinder.
//!
//! This crate provides the foundational types for grid pathfinding: unsigned
//! points, obstacle shapes, and a bounded grid with an occupied-cell set that
//! answers occupancy and neighbour queries.

pub mod geom;
pub mod grid;
pub mod neighbors;
pub mod shape;

pub use geom::Point;
pub use grid::{Grid, ParseGridError};
pub use shape::{Shape, Square};
