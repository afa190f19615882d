//! Procedural map generation for Timberborn.
//!
//! The pipeline runs topology -> start and water sources -> entities ->
//! world document -> archive. [`Generator`] drives it end to end; the
//! individual stages are public so they can be exercised on hand-made
//! heightmaps.

/// Generation options and fixed per-run defaults.
pub mod config;
/// Entity assembly and identifier sources.
pub mod entities;
/// The end-to-end generator and its clock.
pub mod generator;
/// Border scan for water source plateaus.
pub mod sources;
/// Starting location placement.
pub mod start;
/// Noise-based heightmap synthesis.
pub mod topology;

/// Re-export configuration types.
pub use config::{MapOptions, WorldDefaults};
/// Re-export identifier sources.
pub use entities::{IdSource, RandomIds, SeededIds};
/// Re-export the generator and clocks.
pub use generator::{Clock, FixedClock, Generator, SystemClock};
