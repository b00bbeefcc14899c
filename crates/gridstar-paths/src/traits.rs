use gridstar_core::{Grid, Point};

/// Minimal pathfinding interface: map bounds plus neighbour enumeration.
pub trait Pather {
    /// Map dimensions `(xsize, ysize)`, both exclusive bounds.
    fn size(&self) -> (u64, u64);

    /// Append the passable neighbours of `p` into `buf`, in a stable order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, diagonal: bool, buf: &mut Vec<Point>);

    /// Whether `p` lies inside the map bounds.
    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        let (xsize, ysize) = self.size();
        p.x < xsize && p.y < ysize
    }

    /// Whether the map has no cells at all.
    #[inline]
    fn is_empty(&self) -> bool {
        let (xsize, ysize) = self.size();
        xsize == 0 || ysize == 0
    }
}

impl Pather for Grid {
    #[inline]
    fn size(&self) -> (u64, u64) {
        (self.xsize(), self.ysize())
    }

    #[inline]
    fn neighbors(&self, p: Point, diagonal: bool, buf: &mut Vec<Point>) {
        self.neighbours_into(p, diagonal, buf);
    }
}
