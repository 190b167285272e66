//! Level/map containing layers

use crate::{Layer, MultiTileGridLayer, ObjectLayer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A level/map containing tile and object layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub id: Uuid,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub layers: Vec<Layer>,
}

impl Level {
    /// Create a new empty level
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            width,
            height,
            layers: Vec::new(),
        }
    }

    /// Add a new layer on top
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Remove a layer by index
    pub fn remove_layer(&mut self, index: usize) -> Option<Layer> {
        if index < self.layers.len() {
            Some(self.layers.remove(index))
        } else {
            None
        }
    }

    /// Get layer by index
    pub fn get_layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Get mutable layer by index
    pub fn get_layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    /// Get the tile grid at a layer index, if that layer holds tiles
    pub fn tile_layer(&self, index: usize) -> Option<&MultiTileGridLayer> {
        self.layers.get(index).and_then(Layer::as_tiles)
    }

    /// Get the mutable tile grid at a layer index
    pub fn tile_layer_mut(&mut self, index: usize) -> Option<&mut MultiTileGridLayer> {
        self.layers.get_mut(index).and_then(Layer::as_tiles_mut)
    }

    /// Get the object list at a layer index, if that layer holds objects
    pub fn object_layer(&self, index: usize) -> Option<&ObjectLayer> {
        self.layers.get(index).and_then(Layer::as_objects)
    }

    /// Get the mutable object list at a layer index
    pub fn object_layer_mut(&mut self, index: usize) -> Option<&mut ObjectLayer> {
        self.layers.get_mut(index).and_then(Layer::as_objects_mut)
    }

    /// Move a layer up (toward index 0)
    pub fn move_layer_up(&mut self, index: usize) -> bool {
        if index > 0 && index < self.layers.len() {
            self.layers.swap(index, index - 1);
            true
        } else {
            false
        }
    }

    /// Move a layer down (toward higher index)
    pub fn move_layer_down(&mut self, index: usize) -> bool {
        if index < self.layers.len().saturating_sub(1) {
            self.layers.swap(index, index + 1);
            true
        } else {
            false
        }
    }

    /// Toggle layer visibility
    pub fn toggle_layer_visibility(&mut self, index: usize) -> bool {
        if let Some(layer) = self.layers.get_mut(index) {
            layer.visible = !layer.visible;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ObjectInstance, TileCoord, TileRef, TileStack};

    #[test]
    fn test_new_level() {
        let level = Level::new("Test Level", 10, 10);
        assert_eq!(level.name, "Test Level");
        assert_eq!(level.width, 10);
        assert_eq!(level.height, 10);
        assert!(level.layers.is_empty());
    }

    #[test]
    fn test_tile_layer_access() {
        let mut level = Level::new("Test", 10, 10);
        level.add_layer(Layer::new_tile_layer("Ground", 10, 10));
        level.add_layer(Layer::new_object_layer("Entities"));

        let coord = TileCoord::new(5, 5);
        let tile = TileRef::new(Uuid::new_v4(), 42);

        // Initially empty
        assert!(level.tile_layer(0).unwrap().get(coord).is_none());

        level
            .tile_layer_mut(0)
            .unwrap()
            .set(coord, Some(TileStack::single(tile)));
        assert_eq!(level.tile_layer(0).unwrap().get(coord).unwrap().top(), Some(tile));

        // Layer 1 is not a tile layer
        assert!(level.tile_layer(1).is_none());
        assert!(level.object_layer(1).is_some());
    }

    #[test]
    fn test_object_layer_access() {
        let mut level = Level::new("Test", 10, 10);
        level.add_layer(Layer::new_object_layer("Entities"));

        let object = ObjectInstance::new("NPC", [100.0, 100.0]);
        let object_id = object.id;
        level.object_layer_mut(0).unwrap().add_object(object);

        assert!(level.object_layer(0).unwrap().get_object(object_id).is_some());
    }

    #[test]
    fn test_layer_reordering() {
        let mut level = Level::new("Test", 10, 10);
        level.add_layer(Layer::new_tile_layer("A", 10, 10));
        level.add_layer(Layer::new_tile_layer("B", 10, 10));

        assert!(level.move_layer_down(0));
        assert_eq!(level.get_layer(0).unwrap().name, "B");
        assert!(!level.move_layer_down(1));
        assert!(level.move_layer_up(1));
        assert_eq!(level.get_layer(0).unwrap().name, "A");
    }
}
