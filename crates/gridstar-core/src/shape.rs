//! Obstacle shapes.
//!
//! A [`Shape`] is anything that can list the grid cells it occupies. The grid
//! never inspects a shape beyond that, so new shapes only need to implement
//! this trait.

use crate::geom::Point;

/// A region of the grid, expressed as the set of cells it covers.
pub trait Shape {
    /// The cells occupied by the shape.
    fn points(&self) -> Vec<Point>;

    /// Whether `p` is one of the shape's cells.
    fn contains(&self, p: Point) -> bool {
        self.points().iter().any(|&q| q == p)
    }
}

impl Shape for Point {
    fn points(&self) -> Vec<Point> {
        vec![*self]
    }

    #[inline]
    fn contains(&self, p: Point) -> bool {
        *self == p
    }
}

impl Shape for [Point] {
    fn points(&self) -> Vec<Point> {
        self.to_vec()
    }

    #[inline]
    fn contains(&self, p: Point) -> bool {
        <[Point]>::contains(self, &p)
    }
}

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// An axis-aligned square of `size * size` cells whose top-left cell is
/// `origin`.
///
/// The square is half-open: it covers `origin.x..origin.x + size` by
/// `origin.y..origin.y + size`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    origin: Point,
    size: u64,
}

impl Square {
    /// Create a square anchored at `origin` with side length `size`.
    #[inline]
    pub const fn new(origin: Point, size: u64) -> Self {
        Self { origin, size }
    }

    /// Top-left cell.
    #[inline]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Side length.
    #[inline]
    pub const fn size(&self) -> u64 {
        self.size
    }
}

impl Shape for Square {
    /// Row-major list of covered cells. Cells past `u64::MAX` are dropped.
    fn points(&self) -> Vec<Point> {
        let mut pts = Vec::new();
        for i in 0..self.size {
            let Some(y) = self.origin.y.checked_add(i) else {
                break;
            };
            for j in 0..self.size {
                let Some(x) = self.origin.x.checked_add(j) else {
                    break;
                };
                pts.push(Point::new(x, y));
            }
        }
        pts
    }

    fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x - self.origin.x < self.size
            && p.y - self.origin.y < self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_shape_is_itself() {
        let p = Point::new(4, 2);
        assert_eq!(p.points(), vec![p]);
        assert!(Shape::contains(&p, Point::new(4, 2)));
        assert!(!Shape::contains(&p, Point::new(2, 4)));
    }

    #[test]
    fn unit_square_is_its_origin() {
        let s = Square::new(Point::new(1, 1), 1);
        assert_eq!(s.points(), vec![Point::new(1, 1)]);
    }

    #[test]
    fn square_is_half_open() {
        let s = Square::new(Point::new(1, 1), 2);
        assert_eq!(
            s.points(),
            vec![
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
        for outside in [Point::new(0, 1), Point::new(3, 1), Point::new(1, 3)] {
            assert!(!s.contains(outside), "{outside} should be outside");
            assert!(!s.points().iter().any(|&q| q == outside));
        }
    }

    #[test]
    fn square_contains_matches_points() {
        let s = Square::new(Point::new(2, 3), 3);
        assert_eq!(s.points().len(), 9);
        for y in 0..8 {
            for x in 0..8 {
                let p = Point::new(x, y);
                let listed = s.points().iter().any(|&q| q == p);
                assert_eq!(s.contains(p), listed, "mismatch at {p}");
            }
        }
    }

    #[test]
    fn empty_square() {
        let s = Square::new(Point::new(5, 5), 0);
        assert!(s.points().is_empty());
        assert!(!s.contains(Point::new(5, 5)));
    }

    #[test]
    fn square_at_edge_of_domain_is_clipped() {
        let s = Square::new(Point::new(u64::MAX - 1, 0), 3);
        assert_eq!(s.points().len(), 6);
        assert!(s.contains(Point::new(u64::MAX, 2)));
    }

    #[test]
    fn point_list_shape() {
        let wall: &[Point] = &[Point::new(0, 0), Point::new(1, 0)];
        assert_eq!(wall.points(), vec![Point::new(0, 0), Point::new(1, 0)]);
        assert!(Shape::contains(wall, Point::new(1, 0)));
        assert!(!Shape::contains(wall, Point::new(2, 0)));
    }

    /// Horizontal run of `len` cells, relying on the provided `contains`.
    struct Run {
        start: Point,
        len: u64,
    }

    impl Shape for Run {
        fn points(&self) -> Vec<Point> {
            (0..self.len)
                .map(|i| Point::new(self.start.x + i, self.start.y))
                .collect()
        }
    }

    #[test]
    fn default_contains_uses_points() {
        let run = Run {
            start: Point::new(2, 1),
            len: 3,
        };
        assert!(run.contains(Point::new(2, 1)));
        assert!(run.contains(Point::new(4, 1)));
        assert!(!run.contains(Point::new(5, 1)));
        assert!(!run.contains(Point::new(3, 0)));
    }
}
