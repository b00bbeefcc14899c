//! Breadth-first step counts, used as a brute-force oracle in tests.

use std::collections::{HashMap, VecDeque};

use gridstar_core::Point;

use crate::traits::Pather;

/// Fewest unit steps from `from` to `to`, or `None` if `to` is not reached.
pub(crate) fn bfs_steps<P: Pather>(
    pather: &P,
    from: Point,
    to: Point,
    diagonal: bool,
) -> Option<u64> {
    let mut dist: HashMap<Point, u64> = HashMap::new();
    let mut queue: VecDeque<Point> = VecDeque::new();
    let mut nbuf = Vec::with_capacity(8);

    dist.insert(from, 0);
    queue.push_back(from);

    while let Some(cp) = queue.pop_front() {
        let current_dist = dist[&cp];
        if cp == to {
            return Some(current_dist);
        }

        nbuf.clear();
        pather.neighbors(cp, diagonal, &mut nbuf);

        for &np in nbuf.iter() {
            if dist.contains_key(&np) {
                continue;
            }
            dist.insert(np, current_dist + 1);
            queue.push_back(np);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Grid;

    #[test]
    fn open_grid_steps() {
        let g = Grid::new(5, 5);
        let a = Point::new(0, 0);
        let b = Point::new(3, 2);
        assert_eq!(bfs_steps(&g, a, b, false), Some(5));
        assert_eq!(bfs_steps(&g, a, b, true), Some(3));
        assert_eq!(bfs_steps(&g, a, a, true), Some(0));
    }

    #[test]
    fn blocked() {
        let g: Grid = ".#.\n.#.\n.#.".parse().unwrap();
        assert_eq!(bfs_steps(&g, Point::new(0, 0), Point::new(2, 0), true), None);
    }
}
