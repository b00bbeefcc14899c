//! Geometry primitive: [`Point`].
//!
//! Coordinates are unsigned. X grows right, Y grows down, so "up" is the
//! `(0, -1)` direction and the top-left cell of every grid is `(0, 0)`.

use std::fmt;
use std::hash::{Hash, Hasher};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D grid cell with non-negative integer coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: u64,
    pub y: u64,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// Return the point shifted by the signed offset `(dx, dy)`.
    ///
    /// Returns `None` if either coordinate would leave the `u64` domain, so a
    /// point on row or column 0 has no neighbour in the negative direction.
    #[inline]
    pub const fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        let Some(x) = self.x.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add_signed(dy) else {
            return None;
        };
        Some(Self { x, y })
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// This is deliberately not the true Euclidean distance: it is the cost
    /// estimate used by the default A* heuristic. Saturates at `u128::MAX`.
    #[inline]
    pub fn distance(self, other: Point) -> u128 {
        let dx = self.x.abs_diff(other.x) as u128;
        let dy = self.y.abs_diff(other.y) as u128;
        (dx * dx).saturating_add(dy * dy)
    }
}

// --- trait impls for Point ---

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u64, u64)> for Point {
    #[inline]
    fn from((x, y): (u64, u64)) -> Self {
        Self::new(x, y)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":3,"y":7}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
