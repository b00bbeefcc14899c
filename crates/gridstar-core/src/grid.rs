//! The [`Grid`] type: a bounded coordinate plane plus a set of occupied cells.
//!
//! A `Grid` is a static map. Obstacles are added before searching and can
//! never be removed; searches only need `&Grid`, so a finished grid can be
//! shared freely between threads.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::geom::Point;
use crate::neighbors;
use crate::shape::Shape;

/// Character used for a free cell in ASCII maps.
pub const FREE: char = '.';
/// Character used for an occupied cell in ASCII maps.
pub const OBSTACLE: char = '#';

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `xsize` by `ysize` grid with obstacles.
///
/// Valid cells are `[0, xsize) x [0, ysize)`. Obstacle points outside that
/// area may be registered; they are simply never reported as neighbours.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    xsize: u64,
    ysize: u64,
    occupied: HashSet<Point>,
}

impl Grid {
    /// Create an obstacle-free grid. Both sizes are exclusive bounds; a zero
    /// size yields a grid without cells.
    pub fn new(xsize: u64, ysize: u64) -> Self {
        Self {
            xsize,
            ysize,
            occupied: HashSet::new(),
        }
    }

    /// Width (exclusive bound on x).
    #[inline]
    pub fn xsize(&self) -> u64 {
        self.xsize
    }

    /// Height (exclusive bound on y).
    #[inline]
    pub fn ysize(&self) -> u64 {
        self.ysize
    }

    /// Whether the grid has no valid cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xsize == 0 || self.ysize == 0
    }

    /// Whether `p` is inside the grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x < self.xsize && p.y < self.ysize
    }

    /// Mark every cell of `shape` as occupied. Adding a cell twice has no
    /// further effect.
    ///
    /// The shape is expanded with [`Shape::points`] first, so time and memory
    /// grow with the number of cells it covers (`size * size` for a
    /// [`Square`](crate::Square)), not with how much of it lies in bounds.
    pub fn add_obstacle<S: Shape + ?Sized>(&mut self, shape: &S) {
        let pts = shape.points();
        let before = self.occupied.len();
        let total = pts.len();
        self.occupied.extend(pts);
        log::trace!(
            "obstacle added: {} cells, {} new",
            total,
            self.occupied.len() - before
        );
    }

    /// Add several obstacles at once.
    pub fn add_obstacles<'a, S, I>(&mut self, shapes: I)
    where
        S: Shape + ?Sized + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        for s in shapes {
            self.add_obstacle(s);
        }
    }

    /// Whether `p` is part of an obstacle. Bounds are not checked.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.occupied.contains(&p)
    }

    /// Number of distinct occupied cells, including out-of-bounds ones.
    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.occupied.len()
    }

    /// Iterate over occupied cells in no particular order.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.occupied.iter().copied()
    }

    /// In-bounds, unoccupied neighbours of `p`.
    ///
    /// With `diagonal == false` the order is up, left, down, right. With
    /// `diagonal == true` it is up-left, up, up-right, left, right,
    /// down-left, down, down-right.
    pub fn neighbours(&self, p: Point, diagonal: bool) -> Vec<Point> {
        let mut buf = Vec::with_capacity(8);
        self.neighbours_into(p, diagonal, &mut buf);
        buf
    }

    /// Like [`neighbours`](Grid::neighbours) but appends into `buf`.
    pub fn neighbours_into(&self, p: Point, diagonal: bool, buf: &mut Vec<Point>) {
        buf.extend(
            neighbors::candidates(p, diagonal)
                .filter(|&n| self.contains(n) && !self.is_obstacle(n)),
        );
    }
}

impl fmt::Display for Grid {
    /// Renders the in-bounds area, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.ysize {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.xsize {
                let ch = if self.is_obstacle(Point::new(x, y)) {
                    OBSTACLE
                } else {
                    FREE
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ASCII parsing
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing an ASCII map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseGridError {
    /// A line does not have the width of the first line.
    #[error("grid: line {line} has width {found}, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `.` or `#` was found.
    #[error("grid contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parse a map of `.` (free) and `#` (obstacle) characters. The empty
    /// string yields a 0x0 grid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().collect();
        let width = rows.first().map_or(0, |r| r.chars().count());

        let mut occupied = HashSet::new();
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(ParseGridError::Ragged {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as u64, y as u64);
                match ch {
                    FREE => {}
                    OBSTACLE => {
                        occupied.insert(pos);
                    }
                    _ => return Err(ParseGridError::InvalidChar { ch, pos }),
                }
            }
        }

        Ok(Self {
            xsize: width as u64,
            ysize: rows.len() as u64,
            occupied,
        })
    }
}
