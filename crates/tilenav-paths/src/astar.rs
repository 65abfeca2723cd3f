use std::collections::{BinaryHeap, HashMap, HashSet};

use tilenav_core::Position;

use crate::PathGenerator;
use crate::distance::euclidean;
use crate::neighbors::Neighbors;
use crate::node::{FrontierEntry, NO_PARENT, SearchNode, reconstruct};
use crate::request::PathRequest;

impl PathGenerator {
    /// Compute the shortest 8-way route from `from` to `to` using A*.
    ///
    /// Returns the full route including both endpoints, or an empty vector
    /// when `from` is not walkable, no route exists, or the cheapest frontier
    /// node's estimated total cost exceeds
    /// [`SearchConfig::max_search_distance`](crate::SearchConfig::max_search_distance).
    /// The last two cases are indistinguishable to the caller.
    ///
    /// Cardinal steps cost 1, diagonal steps cost √2, and a diagonal step is
    /// only taken when both tiles it brushes past are walkable. The heuristic
    /// is the Euclidean distance to `to`. Frontier ties on `f` are broken by
    /// discovery order, with neighbors discovered E, S, W, N, SE, SW, NE, NW.
    pub fn astar_search(
        &self,
        from: Position,
        to: Position,
        request: &PathRequest<'_>,
    ) -> Vec<Position> {
        let agent = request.ability().label();
        if !request.is_walkable(from) {
            log::debug!("astar: start {from} is not walkable for {agent}");
            return Vec::new();
        }
        // Every expanded neighbor is walkable, so an unwalkable goal can only
        // be reached as the start, which is ruled out above.
        if !request.is_walkable(to) {
            log::debug!("astar: goal {to} is not walkable for {agent}");
            return Vec::new();
        }

        let max_distance = self.config.max_search_distance;
        let mut nodes: Vec<SearchNode> = Vec::new();
        let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut closed: HashSet<Position> = HashSet::new();
        let mut best_g: HashMap<Position, f64> = HashMap::new();
        let mut seq: u64 = 0;

        nodes.push(SearchNode {
            pos: from,
            g: 0.0,
            f: euclidean(from, to),
            parent: NO_PARENT,
        });
        best_g.insert(from, 0.0);
        open.push(FrontierEntry {
            idx: 0,
            f: nodes[0].f,
            seq,
        });
        seq += 1;

        let mut neighbors = Neighbors::new();

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let SearchNode { pos, g, f, .. } = nodes[ci];

            // The frontier is ordered by f, so nothing cheaper remains.
            if f > max_distance {
                log::debug!(
                    "astar: {from} -> {to} abandoned at f={f:.2} (limit {max_distance}) after {} nodes",
                    closed.len()
                );
                return Vec::new();
            }

            // Stale entry for a position already expanded via a cheaper node.
            if !closed.insert(pos) {
                continue;
            }

            if pos == to {
                let path = reconstruct(&nodes, ci);
                log::debug!(
                    "astar: {from} -> {to} found {} points, cost {g:.3}, {} nodes expanded",
                    path.len(),
                    closed.len()
                );
                return path;
            }

            for &(np, dir) in neighbors.all(pos, request) {
                if closed.contains(&np) {
                    continue;
                }
                let ng = g + dir.magnitude();
                if best_g.get(&np).is_some_and(|&old| ng >= old) {
                    continue;
                }
                best_g.insert(np, ng);

                let nf = ng + euclidean(np, to);
                nodes.push(SearchNode {
                    pos: np,
                    g: ng,
                    f: nf,
                    parent: ci,
                });
                open.push(FrontierEntry {
                    idx: nodes.len() - 1,
                    f: nf,
                    seq,
                });
                seq += 1;
            }
        }

        log::debug!("astar: {from} -> {to} unreachable, frontier exhausted");
        Vec::new()
    }
}
