//! [`Path`]: an ordered polyline of positions with geometric queries.

use std::fmt;
use std::ops::Index;

use tilenav_core::Position;

/// Tolerance for the segment intersection test.
const EPS: f64 = 1e-9;

/// An ordered sequence of positions, in travel order.
///
/// Produced by [`PathGenerator`](crate::PathGenerator) or built by hand. A
/// path may be empty or hold a single point; queries that need more points
/// return a neutral result instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Position>,
}

impl Path {
    /// An empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path by copying an existing sequence of points.
    pub fn from_points(points: &[Position]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    /// Remove all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Append a point to the end of the path.
    pub fn add_point(&mut self, p: Position) {
        self.points.push(p);
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Use [`Path::get`] for a checked lookup.
    pub fn at(&self, index: usize) -> &Position {
        match self.points.get(index) {
            Some(p) => p,
            None => panic!(
                "path index {index} out of range for path of {} points",
                self.points.len()
            ),
        }
    }

    /// The point at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Position> {
        self.points.get(index)
    }

    /// The starting point.
    #[inline]
    pub fn first(&self) -> Option<&Position> {
        self.points.first()
    }

    /// The final point.
    #[inline]
    pub fn last(&self) -> Option<&Position> {
        self.points.last()
    }

    /// Read-only view of the points.
    #[inline]
    pub fn points(&self) -> &[Position] {
        &self.points
    }

    /// Iterate over the points in travel order.
    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.points.iter()
    }

    /// The same points in reverse travel order.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Total length: the sum of distances between consecutive points.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Whether any two non-adjacent segments touch or cross.
    ///
    /// Segments `i` and `i + 1` share an endpoint and are never compared, so
    /// fewer than four points can never self-intersect. A path that returns
    /// to an earlier point does count as intersecting.
    pub fn self_intersects(&self) -> bool {
        let pts = &self.points;
        if pts.len() < 4 {
            return false;
        }
        for i in 1..pts.len() {
            for j in (i + 2)..pts.len() {
                if segments_intersect(pts[i - 1], pts[i], pts[j - 1], pts[j]) {
                    return true;
                }
            }
        }
        false
    }

    /// Indices `(i, j)` with `i < j` of the two points farthest apart.
    ///
    /// O(n²). Returns `None` for fewer than two points. On ties the first
    /// pair in `(i, j)` scan order wins.
    pub fn furthest_point_pair(&self) -> Option<(usize, usize)> {
        if self.points.len() < 2 {
            return None;
        }
        let mut best = f64::NEG_INFINITY;
        let mut pair = (0, 1);
        for (i, a) in self.points.iter().enumerate() {
            for (j, b) in self.points.iter().enumerate().skip(i + 1) {
                let d = a.distance(*b);
                if d > best {
                    best = d;
                    pair = (i, j);
                }
            }
        }
        Some(pair)
    }
}

impl From<Vec<Position>> for Path {
    fn from(points: Vec<Position>) -> Self {
        Self { points }
    }
}

impl FromIterator<Position> for Path {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Path {
    type Output = Position;

    fn index(&self, index: usize) -> &Position {
        self.at(index)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path{{points={}, length={}}}", self.len(), self.length())
    }
}

// ---------------------------------------------------------------------------
// Segment intersection
// ---------------------------------------------------------------------------

#[inline]
fn cross(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

/// Whether `p` lies within the bounding box of segment `a`-`b`.
/// Only meaningful when the three points are collinear.
fn on_segment(a: Position, b: Position, p: Position) -> bool {
    p.x() >= a.x().min(b.x()) - EPS
        && p.x() <= a.x().max(b.x()) + EPS
        && p.y() >= a.y().min(b.y()) - EPS
        && p.y() <= a.y().max(b.y()) + EPS
}

/// Parametric segment test: `a0 + t·r` meets `b0 + u·s` for `t, u ∈ [0, 1]`.
fn segments_intersect(a0: Position, a1: Position, b0: Position, b1: Position) -> bool {
    let r = a1 - a0;
    let s = b1 - b0;
    let qp = b0 - a0;

    let rxs = cross(r.dx, r.dy, s.dx, s.dy);
    let qpxr = cross(qp.dx, qp.dy, r.dx, r.dy);

    if rxs.abs() <= EPS {
        if qpxr.abs() > EPS {
            // Parallel, never meeting.
            return false;
        }
        // Collinear: overlap iff some endpoint lies on the other segment.
        return on_segment(a0, a1, b0)
            || on_segment(a0, a1, b1)
            || on_segment(b0, b1, a0)
            || on_segment(b0, b1, a1);
    }

    let t = cross(qp.dx, qp.dy, s.dx, s.dy) / rxs;
    let u = qpxr / rxs;
    (-EPS..=1.0 + EPS).contains(&t) && (-EPS..=1.0 + EPS).contains(&u)
}
