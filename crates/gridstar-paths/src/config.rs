//! Search configuration.

use gridstar_core::Point;

use crate::distance::{chebyshev, manhattan, squared_euclidean};

/// Cost estimate used to order the A* open set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    /// Squared Euclidean distance. Not admissible: paths are always valid
    /// but may be longer than the shortest one.
    #[default]
    SquaredEuclidean,
    /// Manhattan distance, admissible for 4-connected moves.
    Manhattan,
    /// Chebyshev distance, admissible for 8-connected moves.
    Chebyshev,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> u128 {
        match self {
            Self::SquaredEuclidean => squared_euclidean(from, to),
            Self::Manhattan => manhattan(from, to),
            Self::Chebyshev => chebyshev(from, to),
        }
    }

    /// The admissible heuristic for the given movement mode.
    pub fn admissible_for(diagonal_moves: bool) -> Self {
        if diagonal_moves {
            Self::Chebyshev
        } else {
            Self::Manhattan
        }
    }
}

/// Settings for a [`PathSearch`](crate::PathSearch).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Allow the four diagonal moves in addition to the cardinal ones.
    pub diagonal_moves: bool,
    /// Cost estimate to the goal.
    pub heuristic: Heuristic,
}

impl SearchConfig {
    /// Set the movement mode.
    #[must_use]
    pub fn with_diagonal(mut self, diagonal_moves: bool) -> Self {
        self.diagonal_moves = diagonal_moves;
        self
    }

    /// Set the heuristic.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}
