//! Tileset: a pool of tiles cut from an atlas grid

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by tileset lookups
///
/// An out-of-pool index is a caller logic defect, not a data condition,
/// so it surfaces as a hard error instead of an `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TilesetError {
    #[error("tile index {index} is out of range for tileset with {count} tiles")]
    InvalidTileIndex { index: u32, count: u32 },
}

/// A pool of tiles addressed by index, laid out on a column/row grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tileset {
    pub id: Uuid,
    pub name: String,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    pub columns: u32,
    pub rows: u32,
}

impl Tileset {
    /// Create a new tileset with a fresh id
    pub fn new(
        name: impl Into<String>,
        tile_width: u32,
        tile_height: u32,
        columns: u32,
        rows: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tile_width,
            tile_height,
            columns,
            rows,
        }
    }

    /// Total number of tiles in the pool
    pub fn tile_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Whether `index` addresses a tile in this pool
    pub fn contains_index(&self, index: u32) -> bool {
        index < self.tile_count()
    }

    /// Atlas (column, row) position of the tile at `index`
    pub fn tile_coord(&self, index: u32) -> Result<(u32, u32), TilesetError> {
        if !self.contains_index(index) || self.columns == 0 {
            return Err(TilesetError::InvalidTileIndex {
                index,
                count: self.tile_count(),
            });
        }
        Ok((index % self.columns, index / self.columns))
    }
}
