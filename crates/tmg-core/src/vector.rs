use std::fmt;

use serde::{Deserialize, Serialize};

/// A position on the map plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vector2 {
    /// Column, growing to the right.
    pub x: i64,
    /// Row, growing downwards.
    pub y: i64,
}

impl Vector2 {
    /// Create a plane position.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A plane position plus an elevation layer.
///
/// Encodes flat, as `{"X":..,"Y":..,"Z":..}`, the way the game stores block
/// coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector3 {
    /// Position on the map plane.
    #[serde(flatten)]
    pub plane: Vector2,
    /// Elevation layer.
    #[serde(rename = "Z")]
    pub z: i64,
}

impl Vector3 {
    /// Create a block position.
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self::at_layer(Vector2::new(x, y), z)
    }

    /// Lift a plane position to the given layer.
    pub const fn at_layer(plane: Vector2, z: i64) -> Self {
        Self { plane, z }
    }

    /// Column of this position.
    pub const fn x(&self) -> i64 {
        self.plane.x
    }

    /// Row of this position.
    pub const fn y(&self) -> i64 {
        self.plane.y
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.plane.x, self.plane.y, self.z)
    }
}
