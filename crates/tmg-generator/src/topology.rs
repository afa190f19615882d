use noise::{NoiseFn, Perlin};
use tmg_core::{Grid, MapResult};
use tracing::debug;

use crate::config::MapOptions;

/// Highest column a generated cell may have.
pub const MAX_HEIGHT: i64 = 16;
/// Octaves summed into the noise field.
pub const OCTAVES: usize = 3;
/// Each octave's amplitude is the previous one divided by this.
pub const AMPLITUDE_FALLOFF: f64 = 1.8;
/// Each octave's frequency is the previous one multiplied by this.
pub const LACUNARITY: f64 = 2.1;
/// The noise pattern repeats roughly every `dimension / RATIO` cells.
pub const RATIO: usize = 4;

/// Fold a 64-bit seed into the noise source's 32-bit seed.
pub fn noise_seed(seed: i64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}

/// Synthesize a `width x height` heightmap with every cell in `[0, MAX_HEIGHT]`.
///
/// Identical options always yield the same grid.
pub fn generate_topology(options: &MapOptions) -> MapResult<Grid<i64>> {
    options.validate()?;

    let perlin = Perlin::new(noise_seed(options.seed));

    // Maps narrower than RATIO still get a finite period.
    let period_x = (options.width / RATIO).max(1) as f64;
    let period_y = (options.height / RATIO).max(1) as f64;

    let mut topology = Grid::new(options.width, options.height);
    for x in 0..options.width {
        for y in 0..options.height {
            let sample = octave_sum(&perlin, [x as f64 / period_x, y as f64 / period_y]);
            topology.set(x as i64, y as i64, scale_sample(sample))?;
        }
    }

    debug!(
        width = options.width,
        height = options.height,
        seed = options.seed,
        "generated topology"
    );
    Ok(topology)
}

/// Sum [`OCTAVES`] layers of `noise` at `point`.
///
/// The sum is left unnormalized, so it spans roughly `±sqrt(OCTAVES) / 2`
/// instead of the single-octave range.
pub fn octave_sum(noise: &impl NoiseFn<f64, 2>, point: [f64; 2]) -> f64 {
    let mut point = point;
    let mut amplitude = 1.0;
    let mut sum = 0.0;
    for _ in 0..OCTAVES {
        sum += noise.get(point) * amplitude;
        amplitude /= AMPLITUDE_FALLOFF;
        point = [point[0] * LACUNARITY, point[1] * LACUNARITY];
    }
    sum
}

/// Map a raw noise sample onto an integer height.
///
/// Samples are expected within `±sqrt(OCTAVES) / 2`; anything outside is
/// clamped.
pub fn scale_sample(sample: f64) -> i64 {
    let bound = (OCTAVES as f64).sqrt() / 2.0;
    let unit = (sample + bound) / (bound * 2.0);
    let height = (unit * MAX_HEIGHT as f64).round();
    height.clamp(0.0, MAX_HEIGHT as f64) as i64
}
