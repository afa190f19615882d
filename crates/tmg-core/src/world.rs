use std::fmt;

use serde::Serialize;

use crate::entity::Entity;
use crate::grid::Grid;
use crate::time::MapTime;
use crate::vector::{Vector2, Vector3};

/// Game build the generated documents are written for.
pub const GAME_VERSION: &str = "0.2.9.1-0b5fdc2-sm";

/// Water flowing out of one cell towards its four neighbours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Outflow {
    /// First direction.
    pub a: i64,
    /// Second direction.
    pub b: i64,
    /// Third direction.
    pub c: i64,
    /// Fourth direction.
    pub d: i64,
}

impl Outflow {
    /// Create an outflow from its four components.
    pub const fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self { a, b, c, d }
    }
}

impl fmt::Display for Outflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.a, self.b, self.c, self.d)
    }
}

/// Map dimensions block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MapSize {
    /// Width and height in cells.
    pub size: Vector2,
}

/// Terrain block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerrainMap {
    /// Column height of every cell.
    pub heights: Grid<i64>,
}

/// Camera pose restored when the map is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavedCameraState {
    /// Point the camera looks at.
    pub target: Vector3,
    /// Zoom step.
    pub zoom_level: i64,
    /// Yaw in degrees.
    pub horizontal_angle: i64,
    /// Pitch in degrees.
    pub vertical_angle: i64,
}

/// Camera block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CameraStateRestorer {
    /// The saved pose.
    pub saved_camera_state: SavedCameraState,
}

/// Water block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WaterMap {
    /// Water column depth per cell.
    pub water_depths: Grid<i64>,
    /// Directional outflow per cell.
    pub outflows: Grid<Outflow>,
}

/// Soil moisture block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SoilMoistureSimulator {
    /// Moisture per cell.
    pub moisture_levels: Grid<i64>,
}

/// The subsystem blocks stored once per map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Singletons {
    /// Map dimensions.
    pub map_size: MapSize,
    /// Heightmap.
    pub terrain_map: TerrainMap,
    /// Camera pose.
    pub camera_state_restorer: CameraStateRestorer,
    /// Water state.
    pub water_map: WaterMap,
    /// Soil moisture state.
    pub soil_moisture_simulator: SoilMoistureSimulator,
}

/// A complete generated map, as stored in the save archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MapDocument {
    /// Game build tag, see [`GAME_VERSION`].
    pub game_version: String,
    /// When the map was generated.
    pub timestamp: MapTime,
    /// Subsystem state blocks.
    pub singletons: Singletons,
    /// Every placed object.
    pub entities: Vec<Entity>,
}

impl MapDocument {
    /// Map dimensions as `(width, height)`.
    pub fn size(&self) -> Vector2 {
        self.singletons.map_size.size
    }

    /// The terrain heightmap.
    pub fn heights(&self) -> &Grid<i64> {
        &self.singletons.terrain_map.heights
    }
}
