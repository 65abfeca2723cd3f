use tilenav_core::{DirectionVector, Position};

use crate::request::PathRequest;

/// Reusable neighbor enumeration for one position.
///
/// Yields `(neighbor, step)` pairs for every step that lands on a walkable
/// tile and, for diagonals, passes the corner rule of
/// [`PathRequest::is_travelable`].
pub struct Neighbors {
    buf: Vec<(Position, DirectionVector)>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// An empty neighbor buffer.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// 4-directional neighbors of `p`, in E, S, W, N order.
    pub fn cardinal(&mut self, p: Position, request: &PathRequest<'_>) -> &[(Position, DirectionVector)] {
        self.fill(p, &DirectionVector::CARDINALS, request)
    }

    /// 8-directional neighbors of `p`: cardinals first, then SE, SW, NE, NW.
    pub fn all(&mut self, p: Position, request: &PathRequest<'_>) -> &[(Position, DirectionVector)] {
        self.fill(p, &DirectionVector::NEIGHBORS, request)
    }

    fn fill(
        &mut self,
        p: Position,
        dirs: &[DirectionVector],
        request: &PathRequest<'_>,
    ) -> &[(Position, DirectionVector)] {
        self.buf.clear();
        for &d in dirs {
            let n = p + d;
            if request.is_walkable(n) && request.is_travelable(p, d) {
                self.buf.push((n, d));
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WalkGrid;

    #[test]
    fn open_interior_has_eight_neighbors() {
        let grid = WalkGrid::new(3, 3);
        let req = PathRequest::new([], &(), &grid);
        let mut nb = Neighbors::new();
        let all = nb.all(Position::new(1.0, 1.0), &req);
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], (Position::new(2.0, 1.0), DirectionVector::EAST));
        assert_eq!(all[4], (Position::new(2.0, 2.0), DirectionVector::SOUTH_EAST));
    }

    #[test]
    fn edges_clip_out_of_bounds() {
        let grid = WalkGrid::new(3, 3);
        let req = PathRequest::new([], &(), &grid);
        let mut nb = Neighbors::new();
        assert_eq!(nb.all(Position::new(0.0, 0.0), &req).len(), 3);
        assert_eq!(nb.cardinal(Position::new(0.0, 0.0), &req).len(), 2);
    }

    #[test]
    fn corner_cut_removes_diagonal() {
        let grid = WalkGrid::from_ascii(
            "...\n\
             .#.\n\
             ...",
        )
        .unwrap();
        let req = PathRequest::new([], &(), &grid);
        let mut nb = Neighbors::new();
        // From (0,0): E and S open, SE is the wall itself.
        let pts: Vec<Position> = nb.all(Position::new(0.0, 0.0), &req).iter().map(|n| n.0).collect();
        assert_eq!(pts, vec![Position::new(1.0, 0.0), Position::new(0.0, 1.0)]);
        // From (1,0): SE and SW each brush past the wall at (1,1).
        let pts: Vec<Position> = nb.all(Position::new(1.0, 0.0), &req).iter().map(|n| n.0).collect();
        assert_eq!(pts, vec![Position::new(2.0, 0.0), Position::new(0.0, 0.0)]);
    }
}
