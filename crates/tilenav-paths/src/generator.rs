use tilenav_core::Position;

use crate::config::SearchConfig;
use crate::distance::manhattan;
use crate::path::Path;
use crate::request::PathRequest;

/// Entry point for every path query.
///
/// A generator only holds its [`SearchConfig`]; all search state lives on the
/// stack of the call that needs it, so one generator can serve concurrent
/// queries as long as each uses its own [`PathRequest`].
#[derive(Debug, Clone, Default)]
pub struct PathGenerator {
    pub(crate) config: SearchConfig,
}

impl PathGenerator {
    /// A generator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator using `config`.
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator searches with.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Shortest 8-way route from `start` to `end`, or `None` when A* finds
    /// nothing within the search bound.
    pub fn create_shortest_path(
        &self,
        start: Position,
        end: Position,
        request: &PathRequest<'_>,
    ) -> Option<Path> {
        let points = self.astar_search(start, end, request);
        if points.is_empty() {
            return None;
        }
        Some(Path::from(points))
    }

    /// Strict 4-way route from `start` to `end` that never moves away from
    /// the goal on either axis.
    ///
    /// Returns `None` rather than detouring when every such staircase route
    /// crosses a blocked tile. Also fails when `end` is not a whole number of
    /// tiles away from `start` or the route would be longer than
    /// [`SearchConfig::max_search_distance`]. Horizontal steps are taken
    /// first whenever both axes can still reach the goal.
    pub fn create_manhattan_path(
        &self,
        start: Position,
        end: Position,
        request: &PathRequest<'_>,
    ) -> Option<Path> {
        let steps_x = (end.x() - start.x()).round();
        let steps_y = (end.y() - start.y()).round();
        if start.offset(steps_x, steps_y) != end {
            log::debug!("manhattan: {start} -> {end} is not tile-aligned");
            return None;
        }
        if manhattan(start, end) > self.config.max_search_distance {
            log::debug!("manhattan: {start} -> {end} exceeds search distance");
            return None;
        }

        let nx = steps_x.abs() as usize;
        let ny = steps_y.abs() as usize;
        let (sx, sy) = (steps_x.signum(), steps_y.signum());
        let w = nx + 1;
        let cell = |i: usize, j: usize| start.offset(sx * i as f64, sy * j as f64);

        // reach[j * w + i]: a monotone route from cell (i, j) to the goal exists.
        let mut reach = vec![false; w * (ny + 1)];
        for j in (0..=ny).rev() {
            for i in (0..=nx).rev() {
                if !request.is_walkable(cell(i, j)) {
                    continue;
                }
                reach[j * w + i] = (i == nx && j == ny)
                    || (i < nx && reach[j * w + i + 1])
                    || (j < ny && reach[(j + 1) * w + i]);
            }
        }
        if !reach[0] {
            log::debug!("manhattan: no free route from {start} to {end}");
            return None;
        }

        let mut path = Path::new();
        let (mut i, mut j) = (0, 0);
        path.add_point(cell(i, j));
        while (i, j) != (nx, ny) {
            if i < nx && reach[j * w + i + 1] {
                i += 1;
            } else {
                j += 1;
            }
            path.add_point(cell(i, j));
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WalkGrid;

    fn pos(x: i32, y: i32) -> Position {
        Position::from((x, y))
    }

    #[test]
    fn shortest_path_wraps_search() {
        let grid = WalkGrid::new(5, 5);
        let req = PathRequest::new([], &(), &grid);
        let path = PathGenerator::new()
            .create_shortest_path(pos(0, 0), pos(4, 4), &req)
            .unwrap();
        assert_eq!(path.len(), 5);
        assert!((path.length() - 4.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn shortest_path_none_when_unreachable() {
        let grid = WalkGrid::from_ascii(
            "..#..\n\
             ..#..\n\
             ..#..",
        )
        .unwrap();
        let req = PathRequest::new([], &(), &grid);
        assert!(PathGenerator::new().create_shortest_path(pos(0, 0), pos(4, 0), &req).is_none());
    }

    #[test]
    fn manhattan_prefers_horizontal_first() {
        let grid = WalkGrid::new(4, 4);
        let req = PathRequest::new([], &(), &grid);
        let path = PathGenerator::new()
            .create_manhattan_path(pos(0, 0), pos(2, 2), &req)
            .unwrap();
        assert_eq!(
            path.points(),
            &[pos(0, 0), pos(1, 0), pos(2, 0), pos(2, 1), pos(2, 2)]
        );
    }

    #[test]
    fn manhattan_steps_are_cardinal() {
        let grid = WalkGrid::from_ascii(
            ".....\n\
             .#...\n\
             ...#.\n\
             .....",
        )
        .unwrap();
        let req = PathRequest::new([], &(), &grid);
        let path = PathGenerator::new()
            .create_manhattan_path(pos(4, 3), pos(0, 0), &req)
            .unwrap();
        assert_eq!(path.first(), Some(&pos(4, 3)));
        assert_eq!(path.last(), Some(&pos(0, 0)));
        assert_eq!(path.len(), 8);
        for w in path.points().windows(2) {
            assert_eq!(w[0].distance(w[1]), 1.0);
        }
        assert_eq!(path.length(), 7.0);
    }

    #[test]
    fn manhattan_routes_around_single_block() {
        // Horizontal-first is blocked at (1,0); the route must go down first.
        let grid = WalkGrid::from_ascii(
            ".#.\n\
             ...",
        )
        .unwrap();
        let req = PathRequest::new([], &(), &grid);
        let path = PathGenerator::new()
            .create_manhattan_path(pos(0, 0), pos(2, 1), &req)
            .unwrap();
        assert_eq!(path.points(), &[pos(0, 0), pos(0, 1), pos(1, 1), pos(2, 1)]);
    }

    #[test]
    fn manhattan_is_strict() {
        // A detour exists, but no monotone route does.
        let grid = WalkGrid::from_ascii(
            "....\n\
             .##.\n\
             ...#\n\
             ....",
        )
        .unwrap();
        let req = PathRequest::new([], &(), &grid);
        let generator = PathGenerator::new();
        assert!(generator.create_manhattan_path(pos(1, 2), pos(2, 0), &req).is_none());
        assert!(generator.create_shortest_path(pos(1, 2), pos(2, 0), &req).is_some());
    }

    #[test]
    fn manhattan_respects_avoid_tiles() {
        let grid = WalkGrid::new(3, 1);
        let req = PathRequest::new([pos(1, 0)], &(), &grid);
        assert!(PathGenerator::new().create_manhattan_path(pos(0, 0), pos(2, 0), &req).is_none());
    }

    #[test]
    fn manhattan_rejects_misaligned_goal() {
        let grid = |_: Position| true;
        let req = PathRequest::new([], &(), &grid);
        let generator = PathGenerator::new();
        assert!(generator.create_manhattan_path(pos(0, 0), Position::new(2.5, 0.0), &req).is_none());
        let same = generator.create_manhattan_path(pos(3, 3), pos(3, 3), &req).unwrap();
        assert_eq!(same.points(), &[pos(3, 3)]);
    }

    #[test]
    fn manhattan_respects_search_bound() {
        let grid = |_: Position| true;
        let req = PathRequest::new([], &(), &grid);
        let generator = PathGenerator::with_config(SearchConfig::default().with_max_search_distance(10.0));
        assert!(generator.create_manhattan_path(pos(0, 0), pos(6, 5), &req).is_none());
        assert_eq!(generator.create_manhattan_path(pos(0, 0), pos(5, 5), &req).unwrap().len(), 11);
    }
}
