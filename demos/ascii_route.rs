//! Prints the routes every path builder finds on a seeded random map.
//!
//! Run: cargo run --bin ascii-route [seed]

use rand::{RngExt, SeedableRng};
use tilenav_core::Position;
use tilenav_paths::{Path, PathFlag, PathGenerator, PathRequest, WalkGrid};

const WIDTH: usize = 40;
const HEIGHT: usize = 16;
const WALL_PCT: u32 = 22;

fn random_map(seed: u64) -> WalkGrid {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut grid = WalkGrid::new(WIDTH, HEIGHT);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if rng.random_range(0..100) < WALL_PCT {
                grid.set_blocked(Position::new(x as f64, y as f64), true);
            }
        }
    }
    grid
}

fn show(title: &str, grid: &WalkGrid, path: Option<Path>) {
    println!("== {title}");
    match path {
        Some(path) => {
            println!("{path}");
            print!("{}", grid.render_with(&path));
        }
        None => println!("no path"),
    }
    println!();
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let start = Position::new(1.0, 1.0);
    let goal = Position::new((WIDTH - 2) as f64, (HEIGHT - 2) as f64);
    let center = Position::new((WIDTH / 2) as f64, (HEIGHT / 2) as f64);

    let mut grid = random_map(seed);
    for p in [start, goal, center] {
        grid.set_blocked(p, false);
    }

    let generator = PathGenerator::new();
    let request = PathRequest::new([], &(), &grid);

    show("shortest", &grid, generator.create_shortest_path(start, goal, &request));
    show("manhattan", &grid, generator.create_manhattan_path(start, goal, &request));
    for flag in [PathFlag::Skip, PathFlag::Expand] {
        show(
            &format!("circle r=6 ({flag:?})"),
            &grid,
            generator.create_circular_path(start, center, 6.0, &request, flag),
        );
    }
    show(
        "rectangle (Expand)",
        &grid,
        generator.create_rectangular_path(
            start,
            Position::new(4.0, 3.0),
            Position::new(14.0, 11.0),
            &request,
            PathFlag::Expand,
        ),
    );
}
