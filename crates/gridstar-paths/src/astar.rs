use gridstar_core::{Grid, Point};

use crate::PathSearch;
use crate::config::SearchConfig;
use crate::error::PathError;
use crate::search::{Node, NodeRef};
use crate::traits::Pather;

impl PathSearch {
    /// Compute a path from `start` to `goal` using A*.
    ///
    /// Returns the full path, including both endpoints. Every step costs 1,
    /// whether it is orthogonal or diagonal. The occupancy of `start` itself
    /// is never checked, so a search may begin on an obstacle cell.
    ///
    /// # Errors
    ///
    /// - [`PathError::EmptyGrid`] if the map has no cells.
    /// - [`PathError::StartOutOfBounds`] / [`PathError::GoalOutOfBounds`] if
    ///   an endpoint lies outside the map.
    /// - [`PathError::CantReachGoal`] if every reachable cell was expanded
    ///   without finding `goal`.
    pub fn path<P: Pather + ?Sized>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Point>, PathError> {
        if pather.is_empty() {
            let (xsize, ysize) = pather.size();
            return Err(PathError::EmptyGrid { xsize, ysize });
        }
        if !pather.in_bounds(start) {
            return Err(PathError::StartOutOfBounds(start));
        }
        if !pather.in_bounds(goal) {
            return Err(PathError::GoalOutOfBounds(goal));
        }

        self.reset();
        let SearchConfig {
            diagonal_moves,
            heuristic,
        } = self.config;

        self.nodes.insert(
            start,
            Node {
                g: 0,
                f: 0,
                parent: None,
                open: true,
            },
        );
        self.open.push(NodeRef { pos: start, f: 0 });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };
            let cp = current.pos;

            // Skip stale entries.
            let current_g = match self.nodes.get_mut(&cp) {
                Some(n) if n.open && n.f == current.f => {
                    n.open = false;
                    n.g
                }
                _ => continue,
            };
            self.expanded += 1;
            log::trace!("astar: expanding {cp} (g={current_g}, f={})", current.f);

            if cp == goal {
                break 'search true;
            }

            nbuf.clear();
            pather.neighbors(cp, diagonal_moves, &mut nbuf);

            for &np in nbuf.iter() {
                let tentative_g = current_g + 1;
                match self.nodes.get(&np) {
                    // Closed.
                    Some(n) if !n.open => continue,
                    // Already open with a route at least as short.
                    Some(n) if n.g <= tentative_g => continue,
                    _ => {}
                }

                let f = (tentative_g as u128).saturating_add(heuristic.estimate(np, goal));
                self.nodes.insert(
                    np,
                    Node {
                        g: tentative_g,
                        f,
                        parent: Some(cp),
                        open: true,
                    },
                );
                self.open.push(NodeRef { pos: np, f });
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!(
                "astar: {start} -> {goal} unreachable after {} expansions",
                self.expanded
            );
            return Err(PathError::CantReachGoal);
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut cur = Some(goal);
        while let Some(p) = cur {
            path.push(p);
            cur = self.nodes.get(&p).and_then(|n| n.parent);
        }
        path.reverse();

        log::debug!(
            "astar: {start} -> {goal} found {} steps after {} expansions",
            path.len() - 1,
            self.expanded
        );
        Ok(path)
    }
}

/// One-shot A* query on a [`Grid`] with the default heuristic.
///
/// Allocates a fresh [`PathSearch`]; keep one around instead when running
/// many queries.
pub fn path(
    grid: &Grid,
    start: Point,
    goal: Point,
    diagonal_moves: bool,
) -> Result<Vec<Point>, PathError> {
    let config = SearchConfig::default().with_diagonal(diagonal_moves);
    PathSearch::new(config).path(grid, start, goal)
}
