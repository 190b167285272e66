//! Core data structures for the Treefrog tile-map editor
//!
//! This crate provides the fundamental types for representing tile-based maps:
//! - `TileCoord` / `TileRef` / `TileStack` - coordinate-addressed tile stacks
//! - `MultiTileGridLayer` - a sparse tile grid with a rectangular valid range
//! - `ObjectLayer` / `ObjectInstance` - z-ordered placed objects
//! - `PropertyCollection` - named metadata with change notification
//! - `Level` / `Project` - document containers
//! - `Tileset` - tile pool configuration

mod grid;
mod layer;
mod level;
mod object;
mod project;
mod property;
mod tile;
mod tileset;

pub use grid::MultiTileGridLayer;
pub use layer::{Layer, LayerData, LayerType};
pub use level::Level;
pub use object::{ObjectInstance, ObjectLayer};
pub use project::Project;
pub use property::{
    Property, PropertyCollection, PropertyError, PropertyEvent, PropertyListener, Value,
};
pub use tile::{TileCoord, TileRef, TileStack};
pub use tileset::{Tileset, TilesetError};
