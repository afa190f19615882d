use tmg_core::{Grid, MapResult, Vector3};

use crate::config::MapOptions;

/// Layer the colony starts on.
pub const BASE_LAYER: i64 = 4;

/// Pick the colony's starting block.
///
/// Always the centre of the map on [`BASE_LAYER`], whatever the terrain
/// there looks like.
// TODO: search outwards from the centre for a flat area at BASE_LAYER.
pub fn find_start(options: &MapOptions, _topology: &Grid<i64>) -> MapResult<Vector3> {
    Ok(Vector3::new(
        (options.width / 2) as i64,
        (options.height / 2) as i64,
        BASE_LAYER,
    ))
}
