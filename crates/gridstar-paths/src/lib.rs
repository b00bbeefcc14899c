//! A* pathfinding over bounded obstacle grids.
//!
//! This crate finds minimal-step routes between two cells of a
//! [`gridstar_core::Grid`], with or without diagonal moves. Every move costs
//! 1, diagonal or not.
//!
//! - **One-shot queries** with [`path`]
//! - **Reusable engine** [`PathSearch`], which keeps its node table and open
//!   list between queries so that repeated searches do not reallocate
//! - **Custom maps** through the [`Pather`] trait
//!
//! The default [`Heuristic`] is the squared Euclidean distance. It is not
//! admissible, so paths are always valid but occasionally longer than the
//! shortest. Use [`Heuristic::admissible_for`] when minimality matters.
//!
//! Ties between equally scored open nodes are broken by lowest x, then lowest
//! y, so results are reproducible.
//!
//! # Example
//!
//! ```
//! use gridstar_core::{Grid, Point, Square};
//! use gridstar_paths::{PathError, path};
//!
//! let mut grid = Grid::new(6, 6);
//! grid.add_obstacle(&Square::new(Point::new(2, 0), 2));
//!
//! let route = path(&grid, Point::new(0, 0), Point::new(5, 0), true).unwrap();
//! assert_eq!(route.first(), Some(&Point::new(0, 0)));
//! assert_eq!(route.last(), Some(&Point::new(5, 0)));
//!
//! grid.add_obstacle(&Square::new(Point::new(2, 0), 6));
//! assert_eq!(
//!     path(&grid, Point::new(0, 0), Point::new(5, 0), true),
//!     Err(PathError::CantReachGoal)
//! );
//! ```

mod astar;
#[cfg(test)]
mod bfs;
mod config;
mod distance;
mod error;
mod search;
mod traits;

pub use astar::path;
pub use config::{Heuristic, SearchConfig};
pub use distance::{chebyshev, manhattan, squared_euclidean};
pub use error::PathError;
pub use search::PathSearch;
pub use traits::Pather;
