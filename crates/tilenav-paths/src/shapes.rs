//! Shape-based path builders: circular and rectangular patrol outlines.
//!
//! Building a shape path is two steps. First the ideal outline is computed
//! ([`circle_outline`], [`rectangle_outline`]); then every outline point is
//! checked against the request and repaired according to a [`PathFlag`].
//! The repaired outline is finally rotated so that it starts at the point
//! nearest the agent.

use std::f64::consts::TAU;

use tilenav_core::Position;

use crate::PathGenerator;
use crate::path::Path;
use crate::request::PathRequest;

/// Minimum number of samples taken around a circle.
const MIN_CIRCLE_SAMPLES: usize = 8;

/// Largest outline, in units of perimeter, the outline builders will produce.
pub const MAX_OUTLINE_LENGTH: f64 = 65_536.0;

/// What to do with an outline point that is not walkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathFlag {
    /// Drop the point and keep the rest. Cheap.
    #[default]
    Skip,
    /// Replace the point with the nearest walkable position within
    /// [`SearchConfig::expand_radius`](crate::SearchConfig::expand_radius)
    /// tiles. Keeps the shape closer to the requested outline at a higher cost.
    Expand,
}

/// Tile-snapped samples of a circle, clockwise on screen starting at the top.
///
/// Samples are roughly one unit apart (at least eight of them). Consecutive
/// samples that snap to the same tile are merged, and the loop is not closed
/// (the first point is not repeated). A radius of zero yields the center
/// tile alone; a negative or non-finite radius yields nothing, as does a
/// circle longer than [`MAX_OUTLINE_LENGTH`].
pub fn circle_outline(center: Position, radius: f64) -> Vec<Position> {
    if !radius.is_finite() || radius < 0.0 || !is_finite(center) {
        return Vec::new();
    }
    if radius == 0.0 {
        return vec![center.tile()];
    }
    if TAU * radius > MAX_OUTLINE_LENGTH {
        log::debug!("shape: circle of radius {radius} exceeds the outline limit");
        return Vec::new();
    }

    let samples = ((TAU * radius).ceil() as usize).max(MIN_CIRCLE_SAMPLES);
    let mut out: Vec<Position> = Vec::with_capacity(samples);
    for k in 0..samples {
        let theta = TAU * k as f64 / samples as f64;
        // Y grows down, so top is -r and increasing theta turns clockwise.
        let p = center
            .offset(radius * theta.sin(), -radius * theta.cos())
            .tile();
        push_dedup(&mut out, p);
    }
    close_loop(&mut out);
    out
}

/// Perimeter of the axis-aligned box spanned by two opposite corners,
/// clockwise on screen starting at the top-left corner.
///
/// Points are at most one unit apart and every corner is included. A box
/// with zero width or height degenerates to a walk along the line between
/// the corners and back again, so the loop still never jumps; a box of zero
/// size is a single point. Non-finite corners, or a perimeter longer than
/// [`MAX_OUTLINE_LENGTH`], yield nothing.
pub fn rectangle_outline(corner_a: Position, corner_b: Position) -> Vec<Position> {
    if !is_finite(corner_a) || !is_finite(corner_b) {
        return Vec::new();
    }
    let (x0, x1) = min_max(corner_a.x(), corner_b.x());
    let (y0, y1) = min_max(corner_a.y(), corner_b.y());
    let perimeter = 2.0 * ((x1 - x0) + (y1 - y0));
    if perimeter > MAX_OUTLINE_LENGTH {
        log::debug!("shape: rectangle perimeter {perimeter} exceeds the outline limit");
        return Vec::new();
    }
    let top_left = Position::new(x0, y0);
    let top_right = Position::new(x1, y0);
    let bottom_right = Position::new(x1, y1);
    let bottom_left = Position::new(x0, y1);

    if top_left == bottom_right {
        return vec![top_left];
    }

    let mut out = Vec::new();
    if top_left == top_right || top_left == bottom_left {
        push_edge(&mut out, top_left, bottom_right);
        out.push(bottom_right);
        let back: Vec<Position> = out[1..out.len() - 1].iter().rev().copied().collect();
        out.extend(back);
        return out;
    }

    let corners = [top_left, top_right, bottom_right, bottom_left];
    for (k, &c) in corners.iter().enumerate() {
        push_edge(&mut out, c, corners[(k + 1) % corners.len()]);
    }
    out
}

impl PathGenerator {
    /// A loop of walkable positions around `center` at distance `radius`,
    /// starting at the point nearest `agent_pos`.
    ///
    /// Returns `None` if the radius is invalid or too large, or if no outline
    /// point survives repair.
    pub fn create_circular_path(
        &self,
        agent_pos: Position,
        center: Position,
        radius: f64,
        request: &PathRequest<'_>,
        flag: PathFlag,
    ) -> Option<Path> {
        let outline = circle_outline(center, radius);
        self.assemble_shape(outline, agent_pos, request, flag)
    }

    /// A loop of walkable positions around the box spanned by `corner_a` and
    /// `corner_b`, starting at the point nearest `agent_pos`.
    ///
    /// Returns `None` if a corner is not finite, the box is too large, or no
    /// outline point survives repair.
    pub fn create_rectangular_path(
        &self,
        agent_pos: Position,
        corner_a: Position,
        corner_b: Position,
        request: &PathRequest<'_>,
        flag: PathFlag,
    ) -> Option<Path> {
        let outline = rectangle_outline(corner_a, corner_b);
        self.assemble_shape(outline, agent_pos, request, flag)
    }

    fn assemble_shape(
        &self,
        outline: Vec<Position>,
        agent_pos: Position,
        request: &PathRequest<'_>,
        flag: PathFlag,
    ) -> Option<Path> {
        let ideal = outline.len();
        let mut points = self.repair_outline(outline, request, flag);
        if points.is_empty() {
            log::debug!("shape: none of {ideal} outline points are walkable ({flag:?})");
            return None;
        }
        orient_towards(&mut points, agent_pos);
        log::debug!(
            "shape: kept {} of {ideal} outline points ({flag:?})",
            points.len()
        );
        Some(Path::from(points))
    }

    fn repair_outline(
        &self,
        outline: Vec<Position>,
        request: &PathRequest<'_>,
        flag: PathFlag,
    ) -> Vec<Position> {
        let mut out = Vec::with_capacity(outline.len());
        for p in outline {
            if request.is_walkable(p) {
                push_dedup(&mut out, p);
                continue;
            }
            match flag {
                PathFlag::Skip => log::trace!("shape: skipping blocked point {p}"),
                PathFlag::Expand => match self.nearest_walkable(p, request) {
                    Some(q) => {
                        log::trace!("shape: replacing blocked point {p} with {q}");
                        push_dedup(&mut out, q);
                    }
                    None => log::trace!("shape: no substitute for {p}, dropping it"),
                },
            }
        }
        close_loop(&mut out);
        out
    }

    /// Closest walkable position to `p` on the unit lattice around it,
    /// within `expand_radius` tiles on each axis. The first candidate in
    /// row-major scan order wins ties.
    fn nearest_walkable(&self, p: Position, request: &PathRequest<'_>) -> Option<Position> {
        let r = self.config.expand_radius;
        let mut best: Option<(f64, Position)> = None;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let q = p.offset(f64::from(dx), f64::from(dy));
                if !request.is_walkable(q) {
                    continue;
                }
                let d = p.distance(q);
                if best.is_none_or(|(bd, _)| d < bd) {
                    best = Some((d, q));
                }
            }
        }
        best.map(|(_, q)| q)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn is_finite(p: Position) -> bool {
    p.x().is_finite() && p.y().is_finite()
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Append `p` unless it repeats the last point.
fn push_dedup(out: &mut Vec<Position>, p: Position) {
    if out.last() != Some(&p) {
        out.push(p);
    }
}

/// Drop a trailing point equal to the first, leaving the loop implicit.
fn close_loop(out: &mut Vec<Position>) {
    if out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
}

/// Points from `from` towards `to`, at most one unit apart, excluding `to`.
fn push_edge(out: &mut Vec<Position>, from: Position, to: Position) {
    let delta = to - from;
    let steps = (delta.magnitude().ceil() as usize).max(1);
    for k in 0..steps {
        out.push(from + delta * (k as f64 / steps as f64));
    }
}

/// Rotate a closed loop so it starts at the point nearest `agent`.
fn orient_towards(points: &mut [Position], agent: Position) {
    let start = points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| agent.distance(**a).total_cmp(&agent.distance(**b)))
        .map_or(0, |(i, _)| i);
    points.rotate_left(start);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SearchConfig, WalkGrid};

    fn pos(x: i32, y: i32) -> Position {
        Position::from((x, y))
    }

    // -----------------------------------------------------------------------
    // Outlines
    // -----------------------------------------------------------------------

    #[test]
    fn circle_starts_at_top_and_turns_clockwise() {
        let pts = circle_outline(pos(5, 5), 3.0);
        assert_eq!(pts[0], pos(5, 2));
        // A quarter turn later we are on the right side (larger X).
        let right = pts.iter().position(|&p| p == pos(8, 5)).unwrap();
        let bottom = pts.iter().position(|&p| p == pos(5, 8)).unwrap();
        let left = pts.iter().position(|&p| p == pos(2, 5)).unwrap();
        assert!(0 < right && right < bottom && bottom < left);
    }

    #[test]
    fn circle_points_hug_the_radius() {
        let center = pos(10, 10);
        let pts = circle_outline(center, 4.0);
        assert!(pts.len() >= 16);
        for p in &pts {
            // Snapping moves a point at most half a tile on each axis.
            assert!((p.distance(center) - 4.0).abs() <= std::f64::consts::FRAC_1_SQRT_2 + 1e-9);
        }
        for w in pts.windows(2) {
            assert_ne!(w[0], w[1]);
        }
        assert_ne!(pts.first(), pts.last());
    }

    #[test]
    fn circle_degenerate_radii() {
        assert_eq!(circle_outline(Position::new(1.2, 0.8), 0.0), vec![pos(1, 1)]);
        assert!(circle_outline(pos(0, 0), -1.0).is_empty());
        assert!(circle_outline(pos(0, 0), f64::NAN).is_empty());
    }

    #[test]
    fn rectangle_walks_perimeter_clockwise() {
        let pts = rectangle_outline(pos(0, 2), pos(2, 0));
        assert_eq!(
            pts,
            vec![
                pos(0, 0),
                pos(1, 0),
                pos(2, 0),
                pos(2, 1),
                pos(2, 2),
                pos(1, 2),
                pos(0, 2),
                pos(0, 1),
            ]
        );
    }

    #[test]
    fn rectangle_with_fractional_sides_keeps_corners() {
        let pts = rectangle_outline(Position::new(0.0, 0.0), Position::new(1.5, 1.0));
        assert!(pts.contains(&Position::new(1.5, 0.0)));
        assert!(pts.contains(&Position::new(1.5, 1.0)));
        assert!(pts.contains(&Position::new(0.0, 1.0)));
        let mut closed = pts.clone();
        closed.push(pts[0]);
        for w in closed.windows(2) {
            assert!(w[0].distance(w[1]) <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn degenerate_rectangles() {
        assert_eq!(rectangle_outline(pos(3, 3), pos(3, 3)), vec![pos(3, 3)]);
        assert_eq!(
            rectangle_outline(pos(0, 1), pos(3, 1)),
            vec![pos(0, 1), pos(1, 1), pos(2, 1), pos(3, 1), pos(2, 1), pos(1, 1)]
        );
        assert_eq!(
            rectangle_outline(pos(4, 2), pos(4, 0)),
            vec![pos(4, 0), pos(4, 1), pos(4, 2), pos(4, 1)]
        );
        assert_eq!(rectangle_outline(pos(0, 0), pos(1, 0)), vec![pos(0, 0), pos(1, 0)]);
    }

    #[test]
    fn oversized_or_non_finite_outlines_are_empty() {
        assert!(circle_outline(pos(0, 0), 1e18).is_empty());
        assert!(circle_outline(pos(0, 0), 1e9).is_empty());
        assert!(!circle_outline(pos(0, 0), 1000.0).is_empty());
        assert!(rectangle_outline(pos(0, 0), Position::new(f64::INFINITY, 3.0)).is_empty());
        assert!(rectangle_outline(Position::new(f64::NAN, 0.0), pos(3, 3)).is_empty());
        assert!(rectangle_outline(pos(0, 0), Position::new(1e18, 1e18)).is_empty());
        assert!(rectangle_outline(pos(0, 0), Position::new(1e18, 0.0)).is_empty());
    }

    // -----------------------------------------------------------------------
    // Builders
    // -----------------------------------------------------------------------

    #[test]
    fn rectangular_path_starts_near_agent() {
        let grid = WalkGrid::new(6, 6);
        let req = PathRequest::new([], &(), &grid);
        let path = PathGenerator::new()
            .create_rectangular_path(pos(5, 5), pos(1, 1), pos(4, 4), &req, PathFlag::Skip)
            .unwrap();
        assert_eq!(path.len(), 12);
        assert_eq!(path[0], pos(4, 4));
        // Still clockwise: bottom edge runs right to left next.
        assert_eq!(path[1], pos(3, 4));
    }

    #[test]
    fn degenerate_rectangle_never_jumps() {
        let grid = WalkGrid::new(6, 3);
        let req = PathRequest::new([], &(), &grid);
        let path = PathGenerator::new()
            .create_rectangular_path(pos(2, 1), pos(0, 1), pos(4, 1), &req, PathFlag::Skip)
            .unwrap();
        assert_eq!(path[0], pos(2, 1));
        assert_eq!(path.len(), 8);
        let mut closed = path.points().to_vec();
        closed.push(path[0]);
        let max_step = closed
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .fold(0.0, f64::max);
        assert!(max_step <= 1.0 + 1e-9);
    }

    #[test]
    fn oversized_shapes_are_rejected() {
        let grid = |_: Position| true;
        let req = PathRequest::new([], &(), &grid);
        let generator = PathGenerator::new();
        assert!(generator
            .create_circular_path(pos(0, 0), pos(0, 0), 1e18, &req, PathFlag::Skip)
            .is_none());
        assert!(generator
            .create_rectangular_path(
                pos(0, 0),
                pos(0, 0),
                Position::new(f64::INFINITY, f64::INFINITY),
                &req,
                PathFlag::Expand,
            )
            .is_none());
    }

    #[test]
    fn skip_drops_blocked_points() {
        let grid = WalkGrid::from_ascii(
            "....\n\
             ....\n\
             ..#.\n\
             ....",
        )
        .unwrap();
        let req = PathRequest::new([pos(0, 0)], &(), &grid);
        let path = PathGenerator::new()
            .create_rectangular_path(pos(1, 0), pos(0, 0), pos(2, 2), &req, PathFlag::Skip)
            .unwrap();
        assert_eq!(path.len(), 6);
        assert!(!path.points().contains(&pos(0, 0)));
        assert!(!path.points().contains(&pos(2, 2)));
        assert_eq!(path[0], pos(1, 0));
        assert!(path.iter().all(|&p| req.is_walkable(p)));
    }

    #[test]
    fn expand_substitutes_nearest_walkable() {
        let grid = WalkGrid::from_ascii(
            "....\n\
             ....\n\
             ..#.\n\
             ....",
        )
        .unwrap();
        let req = PathRequest::new([], &(), &grid);
        let path = PathGenerator::new()
            .create_rectangular_path(pos(0, 0), pos(0, 0), pos(2, 2), &req, PathFlag::Expand)
            .unwrap();
        // (2,2) is replaced by its first unit-distance neighbor in scan
        // order, (2,1), which merges with the previous outline point.
        assert_eq!(
            path.points(),
            &[pos(0, 0), pos(1, 0), pos(2, 0), pos(2, 1), pos(1, 2), pos(0, 2), pos(0, 1)]
        );
    }

    #[test]
    fn expand_with_zero_radius_acts_like_skip() {
        let grid = WalkGrid::from_ascii("...\n.#.\n...").unwrap();
        let req = PathRequest::new([], &(), &grid);
        let generator =
            PathGenerator::with_config(SearchConfig::default().with_expand_radius(0));
        let expand = generator
            .create_rectangular_path(pos(0, 0), pos(1, 1), pos(1, 1), &req, PathFlag::Expand);
        assert!(expand.is_none());
    }

    #[test]
    fn expand_rescues_fully_blocked_circle_center() {
        let grid = WalkGrid::from_ascii("...\n.#.\n...").unwrap();
        let req = PathRequest::new([], &(), &grid);
        let generator = PathGenerator::new();
        assert!(generator
            .create_circular_path(pos(0, 0), pos(1, 1), 0.0, &req, PathFlag::Skip)
            .is_none());
        let rescued = generator
            .create_circular_path(pos(0, 0), pos(1, 1), 0.0, &req, PathFlag::Expand)
            .unwrap();
        assert_eq!(rescued.points(), &[pos(1, 0)]);
    }

    #[test]
    fn circular_path_avoids_walls_and_faces_agent() {
        let mut grid = WalkGrid::new(21, 21);
        for y in 0..21 {
            grid.set_blocked(pos(16, y), true);
        }
        let req = PathRequest::new([], &(), &grid);
        let generator = PathGenerator::new();
        let agent = pos(10, 18);

        let skip = generator
            .create_circular_path(agent, pos(10, 10), 6.0, &req, PathFlag::Skip)
            .unwrap();
        assert!(skip.iter().all(|&p| req.is_walkable(p)));
        assert_eq!(skip[0], pos(10, 16));

        let expand = generator
            .create_circular_path(agent, pos(10, 10), 6.0, &req, PathFlag::Expand)
            .unwrap();
        assert!(expand.iter().all(|&p| req.is_walkable(p)));
        assert!(expand.len() > skip.len());
        assert!(expand.points().contains(&pos(15, 10)));
    }

    #[test]
    fn shape_fails_when_nothing_is_walkable() {
        let grid = |_: Position| false;
        let req = PathRequest::new([], &(), &grid);
        let generator = PathGenerator::new();
        assert!(generator
            .create_circular_path(pos(0, 0), pos(5, 5), 3.0, &req, PathFlag::Expand)
            .is_none());
        assert!(generator
            .create_circular_path(pos(0, 0), pos(5, 5), -3.0, &req, PathFlag::Skip)
            .is_none());
    }

    #[test]
    fn orient_prefers_lowest_index_on_ties() {
        let mut pts = vec![pos(0, 0), pos(2, 0), pos(2, 2), pos(0, 2)];
        orient_towards(&mut pts, pos(1, 1));
        assert_eq!(pts[0], pos(0, 0));
        orient_towards(&mut pts, pos(3, 3));
        assert_eq!(pts, vec![pos(2, 2), pos(0, 2), pos(0, 0), pos(2, 0)]);
    }
}
