//! Core types for the Timberborn map generator: grids, entities, and the
//! world document.
//!
//! This crate defines the save-file model that the generator fills in. It
//! is independent of any terrain algorithm; you can build a [`MapDocument`]
//! by hand and hand it to [`archive::write_archive`].

/// Archive container and document encoding.
pub mod archive;
/// Typed entity records and their components.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Fixed-size 2D grids with the save-file array encoding.
pub mod grid;
/// Save-file timestamps.
pub mod time;
/// Integer coordinate types.
pub mod vector;
/// The world document and its singleton blocks.
pub mod world;

/// Re-export entity types.
pub use entity::{Components, Entity, EntityId, Template};
/// Re-export error types.
pub use error::{MapError, MapResult};
/// Re-export the grid container.
pub use grid::Grid;
/// Re-export the timestamp type.
pub use time::MapTime;
/// Re-export coordinate types.
pub use vector::{Vector2, Vector3};
/// Re-export world document types.
pub use world::{GAME_VERSION, MapDocument, Outflow, Singletons};
