//! Neighbour offsets.
//!
//! The enumeration order of these tables is part of the search contract: the
//! A* tie-break sees neighbours in exactly this order.

use crate::geom::Point;

/// 4-connected offsets: up, left, down, right.
pub const CARDINAL: [(i64, i64); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

/// 8-connected offsets, row by row from the top-left.
pub const ALL: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Offset table for the given movement mode.
#[inline]
pub fn directions(diagonal: bool) -> &'static [(i64, i64)] {
    if diagonal { &ALL } else { &CARDINAL }
}

/// Candidate neighbours of `p` in table order, before any bounds or
/// occupancy filtering. Offsets that would underflow a coordinate are
/// skipped.
pub fn candidates(p: Point, diagonal: bool) -> impl Iterator<Item = Point> {
    directions(diagonal)
        .iter()
        .filter_map(move |&(dx, dy)| p.offset(dx, dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_order() {
        let got: Vec<_> = candidates(Point::new(1, 1), false).collect();
        assert_eq!(
            got,
            vec![
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 2),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn diagonal_order() {
        let got: Vec<_> = candidates(Point::new(1, 1), true).collect();
        assert_eq!(
            got,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn origin_skips_negative_moves() {
        let got: Vec<_> = candidates(Point::ZERO, true).collect();
        assert_eq!(
            got,
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
        let got: Vec<_> = candidates(Point::ZERO, false).collect();
        assert_eq!(got, vec![Point::new(0, 1), Point::new(1, 0)]);
    }
}
