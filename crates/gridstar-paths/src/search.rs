use std::collections::{BinaryHeap, HashMap};

use gridstar_core::Point;

use crate::config::SearchConfig;

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) g: u64,
    pub(crate) f: u128,
    pub(crate) parent: Option<Point>,
    pub(crate) open: bool,
}

/// Open-set entry, ordered for use in `BinaryHeap`.
///
/// Smallest `f` pops first; ties go to the lowest x, then the lowest y.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) pos: Point,
    pub(crate) f: u128,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first.
        // Ties use x then y, independent of Point's row-major Ord.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.pos.x.cmp(&self.pos.x))
            .then_with(|| other.pos.y.cmp(&self.pos.y))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Reusable A* engine.
///
/// `PathSearch` owns the node table, open list and neighbour buffer so that
/// repeated queries reuse their allocations. It holds no reference to a map:
/// one engine can serve many grids, and one grid can be searched by many
/// engines at once (one per thread).
#[derive(Debug, Default)]
pub struct PathSearch {
    pub(crate) config: SearchConfig,
    pub(crate) nodes: HashMap<Point, Node>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) nbuf: Vec<Point>,
    pub(crate) expanded: usize,
}

impl PathSearch {
    /// Create an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            nodes: HashMap::new(),
            open: BinaryHeap::new(),
            nbuf: Vec::with_capacity(8),
            expanded: 0,
        }
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Replace the configuration. Caches are kept.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Number of nodes closed by the last query.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.expanded = 0;
    }
}
