//! Configuration for a generation run.

use tmg_core::world::SavedCameraState;
use tmg_core::{MapError, MapResult, Vector3};

/// Largest map, in cells, that a run will allocate.
pub const MAX_CELLS: usize = 1 << 24;

/// Size and seed of the map to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOptions {
    /// Columns, must be positive.
    pub width: usize,
    /// Rows, must be positive.
    pub height: usize,
    /// Seed for the terrain noise.
    pub seed: i64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            seed: 0,
        }
    }
}

impl MapOptions {
    /// Options for a `width x height` map with the given seed.
    pub fn new(width: usize, height: usize, seed: i64) -> Self {
        Self {
            width,
            height,
            seed,
        }
    }

    /// Set the map dimensions.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the noise seed.
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject maps with no cells, or more cells than can be addressed.
    pub fn validate(&self) -> MapResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MapError::InvalidOptions(format!(
                "map must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        let cells = self.width.checked_mul(self.height);
        if cells.is_none_or(|cells| cells > MAX_CELLS) {
            return Err(MapError::InvalidOptions(format!(
                "map of {}x{} exceeds {MAX_CELLS} cells",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Values every generated map starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldDefaults {
    /// Camera pose when the map is first opened.
    pub camera: SavedCameraState,
    /// Strength of newly placed water sources.
    pub water_source_strength: i64,
}

impl Default for WorldDefaults {
    fn default() -> Self {
        Self {
            camera: SavedCameraState {
                target: Vector3::new(0, 0, 0),
                zoom_level: 0,
                horizontal_angle: 30,
                vertical_angle: 70,
            },
            water_source_strength: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = MapOptions::default();
        assert_eq!((opts.width, opts.height, opts.seed), (256, 256, 0));
    }

    #[test]
    fn builder_methods() {
        let opts = MapOptions::default().with_size(16, 32).with_seed(-7);
        assert_eq!(opts, MapOptions::new(16, 32, -7));
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(MapOptions::new(0, 4, 1).validate().is_err());
        assert!(MapOptions::new(4, 0, 1).validate().is_err());
        assert!(MapOptions::new(1, 1, 1).validate().is_ok());
    }

    #[test]
    fn oversized_maps_rejected() {
        assert!(MapOptions::new(usize::MAX, usize::MAX, 0).validate().is_err());
        assert!(MapOptions::new(usize::MAX, 2, 0).validate().is_err());
        assert!(MapOptions::new(1 << 13, 1 << 12, 0).validate().is_err());
        assert!(MapOptions::new(1 << 12, 1 << 12, 0).validate().is_ok());
        assert!(MapOptions::new(MAX_CELLS, 1, 0).validate().is_ok());
    }

    #[test]
    fn default_camera_pose() {
        let defaults = WorldDefaults::default();
        assert_eq!(defaults.camera.horizontal_angle, 30);
        assert_eq!(defaults.camera.vertical_angle, 70);
        assert_eq!(defaults.water_source_strength, 8);
    }
}
