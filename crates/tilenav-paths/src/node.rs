use std::cmp::Ordering;

use tilenav_core::Position;

/// Parent index of the root node.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Arena node for A* searches
// ---------------------------------------------------------------------------

/// A discovered search state. Never mutated after it is pushed into the
/// arena; a cheaper route to the same position becomes a new node.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchNode {
    pub(crate) pos: Position,
    /// Distance travelled from the start.
    pub(crate) g: f64,
    /// `g` plus the heuristic to the goal.
    pub(crate) f: f64,
    /// Arena index of the predecessor, or [`NO_PARENT`].
    pub(crate) parent: usize,
}

/// Reference into the node arena, ordered for use in `BinaryHeap`.
///
/// Pops the smallest `f` first; equal `f` values pop in insertion order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest seq.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Walk predecessor links from `idx` back to the root, returning the
/// positions in root-to-`idx` order.
pub(crate) fn reconstruct(nodes: &[SearchNode], mut idx: usize) -> Vec<Position> {
    let mut path = Vec::new();
    while idx != NO_PARENT {
        path.push(nodes[idx].pos);
        idx = nodes[idx].parent;
    }
    path.reverse();
    path
}
