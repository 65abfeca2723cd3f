use tilenav_core::Position;

/// Euclidean (L2) distance between two positions. The A* heuristic.
#[inline]
pub fn euclidean(a: Position, b: Position) -> f64 {
    a.distance(b)
}

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> f64 {
    (a.x() - b.x()).abs() + (a.y() - b.y()).abs()
}

/// Chebyshev (L∞) distance between two positions.
#[inline]
pub fn chebyshev(a: Position, b: Position) -> f64 {
    (a.x() - b.x()).abs().max((a.y() - b.y()).abs())
}
