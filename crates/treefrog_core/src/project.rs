//! Project: levels plus the tilesets they reference

use crate::{Level, Tileset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project bundling levels with their tilesets
///
/// This is the document root that editing commands address: commands carry
/// a level id and a layer index and resolve both at apply time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Format version for future compatibility
    pub version: u32,
    pub levels: Vec<Level>,
    #[serde(default)]
    pub tilesets: Vec<Tileset>,
}

impl Project {
    /// Create a project holding a single level
    pub fn new(level: Level) -> Self {
        Self {
            version: 1,
            levels: vec![level],
            tilesets: Vec::new(),
        }
    }

    /// Create an empty project
    pub fn empty() -> Self {
        Self {
            version: 1,
            levels: Vec::new(),
            tilesets: Vec::new(),
        }
    }

    /// Get a level by id
    pub fn level(&self, id: Uuid) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    /// Get a mutable level by id
    pub fn level_mut(&mut self, id: Uuid) -> Option<&mut Level> {
        self.levels.iter_mut().find(|l| l.id == id)
    }

    /// Get a tileset by id
    pub fn tileset(&self, id: Uuid) -> Option<&Tileset> {
        self.tilesets.iter().find(|t| t.id == id)
    }

    /// Add a tileset to the pool
    pub fn add_tileset(&mut self, tileset: Tileset) {
        self.tilesets.push(tileset);
    }

    /// Validate that every tile reference points at a known tileset
    pub fn validate(&self) -> Result<(), String> {
        for level in &self.levels {
            for (layer_idx, layer) in level.layers.iter().enumerate() {
                let Some(grid) = layer.as_tiles() else {
                    continue;
                };
                for (coord, stack) in grid.iter() {
                    for tile in stack.iter() {
                        if self.tileset(tile.tileset_id).is_none() {
                            return Err(format!(
                                "level '{}' layer {layer_idx} cell {coord} references missing tileset {}",
                                level.name, tile.tileset_id
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Layer, TileCoord, TileRef, TileStack};

    #[test]
    fn test_project_level_lookup() {
        let level = Level::new("Test", 10, 10);
        let level_id = level.id;
        let project = Project::new(level);

        assert_eq!(project.version, 1);
        assert!(project.level(level_id).is_some());
        assert!(project.level(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_validation() {
        let mut level = Level::new("Test", 10, 10);
        level.add_layer(Layer::new_tile_layer("Ground", 10, 10));
        let tileset = Tileset::new("Ground", 16, 16, 8, 8);
        let tile = TileRef::new(tileset.id, 3);

        level
            .tile_layer_mut(0)
            .unwrap()
            .set(TileCoord::new(2, 2), Some(TileStack::single(tile)));

        let mut project = Project::new(level);
        assert!(project.validate().is_err());

        project.add_tileset(tileset);
        assert!(project.validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut level = Level::new("Test", 4, 4);
        level.add_layer(Layer::new_tile_layer("Ground", 4, 4));
        let tileset = Tileset::new("Ground", 16, 16, 4, 4);
        let tile = TileRef::new(tileset.id, 1);
        level
            .tile_layer_mut(0)
            .unwrap()
            .set(TileCoord::new(1, 1), Some(TileStack::single(tile)));

        let mut project = Project::new(level);
        project.add_tileset(tileset);

        let json = serde_json::to_string(&project).unwrap();
        let restored: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.levels[0].name, "Test");
        let stack = restored.levels[0]
            .tile_layer(0)
            .unwrap()
            .get(TileCoord::new(1, 1))
            .unwrap();
        assert_eq!(stack.top(), Some(tile));
    }
}
