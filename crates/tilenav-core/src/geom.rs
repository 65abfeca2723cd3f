//! Geometry primitives: [`Position`] and [`DirectionVector`].
//!
//! Positions are stored as `f64` but compare and hash on a quantized grid so
//! that floating-point noise never splits one logical tile into two.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

use crate::error::{Axis, GeomError, Result};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// An immutable 2D world position. X grows right, Y grows down.
///
/// Equality and hashing use [`Position::quantize`] on both axes, so two
/// positions closer than [`Position::EPSILON`] on each axis are the same
/// logical position. Raw lexicographic ordering is available through
/// [`Position::cmp_raw`].
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Quantization step used by equality and hashing.
    pub const EPSILON: f64 = 1e-9;

    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new position.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate.
    #[inline]
    pub const fn x(self) -> f64 {
        self.x
    }

    /// Vertical coordinate, growing downward.
    #[inline]
    pub const fn y(self) -> f64 {
        self.y
    }

    /// Integer cell column containing this position.
    pub fn cell_x(self) -> Result<usize> {
        Self::cell_index(self.x, Axis::X)
    }

    /// Integer cell row containing this position.
    pub fn cell_y(self) -> Result<usize> {
        Self::cell_index(self.y, Axis::Y)
    }

    fn cell_index(value: f64, axis: Axis) -> Result<usize> {
        if !value.is_finite() {
            return Err(GeomError::NonFinite { axis });
        }
        if value < 0.0 {
            return Err(GeomError::NegativeCoordinate { axis, value });
        }
        Ok(value as usize)
    }

    /// Return a position translated by (dx, dy).
    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// One unit up (towards smaller Y).
    #[inline]
    pub fn up(self) -> Self {
        self.offset(0.0, -1.0)
    }

    /// One unit down (towards larger Y).
    #[inline]
    pub fn down(self) -> Self {
        self.offset(0.0, 1.0)
    }

    /// One unit left (towards smaller X).
    #[inline]
    pub fn left(self) -> Self {
        self.offset(-1.0, 0.0)
    }

    /// One unit right (towards larger X).
    #[inline]
    pub fn right(self) -> Self {
        self.offset(1.0, 0.0)
    }

    /// The tile this position falls in: each axis rounded to the nearest
    /// integer, so tile (1, 1) covers `[0.5, 1.5)` on both axes.
    #[inline]
    pub fn tile(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        (other - self).magnitude()
    }

    /// `round(value / EPSILON)` as a 64-bit integer.
    ///
    /// Shared by `PartialEq` and `Hash`, which keeps `a == b` implying
    /// `hash(a) == hash(b)`.
    ///
    /// The conversion saturates: values beyond about ±9.2e9 all map to
    /// `i64::MAX` / `i64::MIN` and so compare equal on that axis. NaN maps to
    /// 0, making a NaN coordinate equal to 0.0. Keep coordinates finite and
    /// within that range when equality matters.
    #[inline]
    pub fn quantize(value: f64) -> i64 {
        (value / Self::EPSILON).round() as i64
    }

    /// Raw lexicographic comparison on the unquantized `(x, y)` pair.
    ///
    /// Use with `sort_by` / `BTreeMap` keys built from it. This deliberately is
    /// not `Ord`: two positions can be equal under quantization while still
    /// ordering apart here.
    pub fn cmp_raw(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

// --- trait impls for Position ---

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        Self::quantize(self.x) == Self::quantize(other.x)
            && Self::quantize(self.y) == Self::quantize(other.y)
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::quantize(self.x).hash(state);
        Self::quantize(self.y).hash(state);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl Add<DirectionVector> for Position {
    type Output = Self;
    #[inline]
    fn add(self, v: DirectionVector) -> Self {
        Self::new(self.x + v.dx, self.y + v.dy)
    }
}

impl Sub<DirectionVector> for Position {
    type Output = Self;
    #[inline]
    fn sub(self, v: DirectionVector) -> Self {
        Self::new(self.x - v.dx, self.y - v.dy)
    }
}

/// `to - from` is the vector pointing from `from` to `to`.
impl Sub for Position {
    type Output = DirectionVector;
    #[inline]
    fn sub(self, from: Self) -> DirectionVector {
        DirectionVector::between(from, self)
    }
}

// ---------------------------------------------------------------------------
// DirectionVector
// ---------------------------------------------------------------------------

/// A 2D delta used for movement steps and corner-adjacency checks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionVector {
    pub dx: f64,
    pub dy: f64,
}

impl DirectionVector {
    pub const EAST: Self = Self::new(1.0, 0.0);
    pub const SOUTH: Self = Self::new(0.0, 1.0);
    pub const WEST: Self = Self::new(-1.0, 0.0);
    pub const NORTH: Self = Self::new(0.0, -1.0);
    pub const SOUTH_EAST: Self = Self::new(1.0, 1.0);
    pub const SOUTH_WEST: Self = Self::new(-1.0, 1.0);
    pub const NORTH_EAST: Self = Self::new(1.0, -1.0);
    pub const NORTH_WEST: Self = Self::new(-1.0, -1.0);

    /// The four cardinal unit steps (E, S, W, N).
    pub const CARDINALS: [Self; 4] = [Self::EAST, Self::SOUTH, Self::WEST, Self::NORTH];

    /// All eight unit steps: cardinals first, then diagonals (SE, SW, NE, NW).
    pub const NEIGHBORS: [Self; 8] = [
        Self::EAST,
        Self::SOUTH,
        Self::WEST,
        Self::NORTH,
        Self::SOUTH_EAST,
        Self::SOUTH_WEST,
        Self::NORTH_EAST,
        Self::NORTH_WEST,
    ];

    /// Create a vector from its components.
    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// The vector pointing from `from` to `to`.
    /// Example: (0,0) → (1,1) gives (1,1).
    #[inline]
    pub fn between(from: Position, to: Position) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Scalar dot product. `*` is the component-wise product instead.
    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self.dx * rhs.dx + self.dy * rhs.dy
    }

    /// Whether both components are non-zero.
    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.dx != 0.0 && self.dy != 0.0
    }
}

impl Add for DirectionVector {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for DirectionVector {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

/// Component-wise product, e.g. `dir * EAST` keeps only the X step of `dir`.
impl Mul for DirectionVector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.dx * rhs.dx, self.dy * rhs.dy)
    }
}

impl Mul<f64> for DirectionVector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.dx * rhs, self.dy * rhs)
    }
}

impl fmt::Display for DirectionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn position_round_trip() {
        let p = Position::new(1.25, -7.5);
        let json = serde_json::to_string(&p).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn vector_round_trip() {
        let v = DirectionVector::new(0.5, 2.0);
        let json = serde_json::to_string(&v).unwrap();
        let back: DirectionVector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
