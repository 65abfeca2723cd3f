use std::collections::HashSet;
use std::fmt;

use tilenav_core::{DirectionVector, Position};

use crate::traits::{AgentAbility, WorldGrid};

/// Everything one path query needs: the map, the agent, and tiles to treat
/// as blocked for this query only.
///
/// A request borrows the grid and the agent, so it cannot outlive them.
/// Build one per query (and per thread when searching concurrently).
pub struct PathRequest<'a> {
    avoid_tiles: HashSet<Position>,
    ability: &'a dyn AgentAbility,
    world_grid: &'a dyn WorldGrid,
}

impl<'a> PathRequest<'a> {
    /// Create a request. Each avoid position blocks its whole tile, so
    /// (1, 1) blocks every position in `[0.5, 1.5)` on both axes.
    pub fn new(
        avoid_tiles: impl IntoIterator<Item = Position>,
        ability: &'a dyn AgentAbility,
        world_grid: &'a dyn WorldGrid,
    ) -> Self {
        Self {
            avoid_tiles: avoid_tiles.into_iter().map(Position::tile).collect(),
            ability,
            world_grid,
        }
    }

    /// The normalized avoid tiles.
    pub fn avoid_tiles(&self) -> &HashSet<Position> {
        &self.avoid_tiles
    }

    /// The agent this request is made for.
    pub fn ability(&self) -> &'a dyn AgentAbility {
        self.ability
    }

    /// The walkability oracle.
    pub fn world_grid(&self) -> &'a dyn WorldGrid {
        self.world_grid
    }

    /// Whether `p` lies on one of the avoid tiles.
    #[inline]
    pub fn is_avoided(&self, p: Position) -> bool {
        !self.avoid_tiles.is_empty() && self.avoid_tiles.contains(&p.tile())
    }

    /// Walkable for this query: the grid allows it and it is not avoided.
    #[inline]
    pub fn is_walkable(&self, p: Position) -> bool {
        !self.is_avoided(p) && self.world_grid.is_walkable(p)
    }

    /// Whether a single step `dir` from `from` is allowed by the corner rule.
    ///
    /// Cardinal steps always pass. A diagonal step needs both orthogonal
    /// tiles it brushes past to be walkable:
    ///
    /// ```text
    /// #.#
    /// #..
    /// .#.
    /// ```
    ///
    /// Here the bottom-left tile cannot be entered from the centre.
    /// This does not check the destination itself.
    pub fn is_travelable(&self, from: Position, dir: DirectionVector) -> bool {
        if !dir.is_diagonal() {
            return true;
        }
        self.is_walkable(from + dir * DirectionVector::EAST)
            && self.is_walkable(from + dir * DirectionVector::SOUTH)
    }
}

impl fmt::Debug for PathRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathRequest")
            .field("avoid_tiles", &self.avoid_tiles)
            .field("agent", &self.ability.label())
            .finish_non_exhaustive()
    }
}
