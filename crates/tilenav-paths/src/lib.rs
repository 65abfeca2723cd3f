//! Pathfinding on tile grids with floating-point world positions.
//!
//! This crate computes routes between two [`Position`](tilenav_core::Position)s
//! on a map that only exposes a walkability query, and represents them as a
//! queryable [`Path`]:
//!
//! - **A\*** 8-way search with corner-cut validation ([`PathGenerator::astar_search`])
//! - **Shortest** paths wrapped as a [`Path`] ([`PathGenerator::create_shortest_path`])
//! - **Manhattan** strict 4-way routes ([`PathGenerator::create_manhattan_path`])
//! - **Circular** and **rectangular** patrol outlines with [`PathFlag`]
//!   repair ([`PathGenerator::create_circular_path`],
//!   [`PathGenerator::create_rectangular_path`])
//!
//! Every query is scoped by a [`PathRequest`], which borrows the map
//! ([`WorldGrid`]) and the moving agent ([`AgentAbility`]) and carries a set
//! of tiles to avoid for that query only.
//!
//! A failed search is never an error: builders return `None` and
//! [`PathGenerator::astar_search`] returns an empty vector. Searches are
//! bounded by [`SearchConfig::max_search_distance`]; a goal beyond that bound
//! is reported exactly like an unreachable one.

mod astar;
mod config;
mod distance;
mod error;
mod generator;
mod grid;
mod neighbors;
mod node;
mod path;
mod request;
mod shapes;
mod traits;

pub use config::{DEFAULT_EXPAND_RADIUS, MAX_SEARCH_DISTANCE, SearchConfig};
pub use distance::{chebyshev, euclidean, manhattan};
pub use error::GridParseError;
pub use generator::PathGenerator;
pub use grid::WalkGrid;
pub use neighbors::Neighbors;
pub use path::Path;
pub use request::PathRequest;
pub use shapes::{MAX_OUTLINE_LENGTH, PathFlag, circle_outline, rectangle_outline};
pub use traits::{AgentAbility, WorldGrid};
