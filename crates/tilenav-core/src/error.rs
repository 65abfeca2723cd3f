//! Error types for geometry conversions.

use thiserror::Error;

/// Axis of a [`Position`](crate::Position) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors raised when a position cannot be mapped onto the cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    #[error("{axis} coordinate {value} is negative; cell indices are unsigned")]
    NegativeCoordinate { axis: Axis, value: f64 },

    #[error("{axis} coordinate is not finite")]
    NonFinite { axis: Axis },
}

pub type Result<T> = std::result::Result<T, GeomError>;
