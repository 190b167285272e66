//! Layer types for tile and object layers

use crate::{MultiTileGridLayer, ObjectLayer};
use serde::{Deserialize, Serialize};

/// A layer (tiles or objects)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub visible: bool,
    pub data: LayerData,
}

impl Layer {
    /// Create a new tile layer of the given extent
    pub fn new_tile_layer(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            visible: true,
            data: LayerData::Tiles(MultiTileGridLayer::new(width, height)),
        }
    }

    /// Create a new object layer
    pub fn new_object_layer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            data: LayerData::Objects(ObjectLayer::new()),
        }
    }

    /// Get the type of this layer
    pub fn layer_type(&self) -> LayerType {
        match &self.data {
            LayerData::Tiles(_) => LayerType::Tiles,
            LayerData::Objects(_) => LayerType::Objects,
        }
    }

    /// The tile grid, if this is a tile layer
    pub fn as_tiles(&self) -> Option<&MultiTileGridLayer> {
        match &self.data {
            LayerData::Tiles(grid) => Some(grid),
            LayerData::Objects(_) => None,
        }
    }

    /// The mutable tile grid, if this is a tile layer
    pub fn as_tiles_mut(&mut self) -> Option<&mut MultiTileGridLayer> {
        match &mut self.data {
            LayerData::Tiles(grid) => Some(grid),
            LayerData::Objects(_) => None,
        }
    }

    /// The object list, if this is an object layer
    pub fn as_objects(&self) -> Option<&ObjectLayer> {
        match &self.data {
            LayerData::Objects(objects) => Some(objects),
            LayerData::Tiles(_) => None,
        }
    }

    /// The mutable object list, if this is an object layer
    pub fn as_objects_mut(&mut self) -> Option<&mut ObjectLayer> {
        match &mut self.data {
            LayerData::Objects(objects) => Some(objects),
            LayerData::Tiles(_) => None,
        }
    }
}

/// The type of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerType {
    Tiles,
    Objects,
}

/// The data contained in a layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayerData {
    /// Tile layer holding stacked tile references per cell
    Tiles(MultiTileGridLayer),
    /// Object layer holding z-ordered instances
    Objects(ObjectLayer),
}
