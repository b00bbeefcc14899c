use gridstar_core::Point;

/// Squared Euclidean distance between two points.
#[inline]
pub fn squared_euclidean(a: Point, b: Point) -> u128 {
    a.distance(b)
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u128 {
    a.x.abs_diff(b.x) as u128 + a.y.abs_diff(b.y) as u128
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> u128 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y)) as u128
}
