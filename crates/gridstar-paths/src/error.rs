//! Error type for path queries.

use gridstar_core::Point;

/// Errors returned by [`PathSearch::path`](crate::PathSearch::path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The open set was exhausted before the goal was expanded.
    #[error("astar: could not reach goal")]
    CantReachGoal,

    /// The map has no valid cells.
    #[error("astar: grid {xsize}x{ysize} has no cells")]
    EmptyGrid { xsize: u64, ysize: u64 },

    /// The start point lies outside the map.
    #[error("astar: start {0} is outside the grid")]
    StartOutOfBounds(Point),

    /// The goal point lies outside the map.
    #[error("astar: goal {0} is outside the grid")]
    GoalOutOfBounds(Point),
}

impl PathError {
    /// Whether the query itself was malformed, as opposed to the goal being
    /// unreachable.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::CantReachGoal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            PathError::CantReachGoal.to_string(),
            "astar: could not reach goal"
        );
        assert_eq!(
            PathError::GoalOutOfBounds(Point::new(9, 1)).to_string(),
            "astar: goal (9, 1) is outside the grid"
        );
        assert_eq!(
            PathError::EmptyGrid { xsize: 0, ysize: 4 }.to_string(),
            "astar: grid 0x4 has no cells"
        );
    }

    #[test]
    fn classification() {
        assert!(!PathError::CantReachGoal.is_invalid_input());
        assert!(PathError::StartOutOfBounds(Point::ZERO).is_invalid_input());
        assert!(PathError::EmptyGrid { xsize: 0, ysize: 0 }.is_invalid_input());
    }
}
