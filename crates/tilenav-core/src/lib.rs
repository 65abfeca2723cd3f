//! **tilenav-core** — Geometry primitives for tile-grid navigation.
//!
//! This crate provides the value types shared by the *tilenav* crates: a
//! floating-point [`Position`] with quantized identity, and a
//! [`DirectionVector`] used for movement deltas and corner checks.

pub mod error;
pub mod geom;

pub use error::GeomError;
pub use geom::{DirectionVector, Position};
