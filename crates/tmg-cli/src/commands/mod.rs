pub mod generate;
pub mod inspect;
pub mod preview;

use chrono::Utc;
use tmg_generator::MapOptions;

/// A seed that differs between runs: wall-clock milliseconds times the pid.
fn default_seed() -> i64 {
    Utc::now()
        .timestamp_millis()
        .wrapping_mul(i64::from(std::process::id()))
}

/// Build options, filling in a fresh seed and announcing it so the map can
/// be regenerated later.
fn options(width: usize, height: usize, seed: Option<i64>) -> MapOptions {
    let seed = seed.unwrap_or_else(default_seed);
    println!("Seed: {seed}");
    MapOptions::new(width, height, seed)
}
