//! Tile coordinate, tile reference and tile stack primitives

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A 2D tile coordinate in layer space
///
/// Coordinates are signed so that callers can address cells relative to the
/// layer origin; whether a coordinate is actually inside a layer is decided
/// by [`MultiTileGridLayer::in_range`](crate::MultiTileGridLayer::in_range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for TileCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A reference to a tile in a tileset
///
/// Tiles themselves are owned by their tileset; layers and commands only
/// hold handles. Copying a `TileRef` never copies tile data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileRef {
    /// The tileset this tile belongs to
    pub tileset_id: Uuid,
    /// Index of the tile within the tileset
    pub index: u32,
}

impl TileRef {
    pub fn new(tileset_id: Uuid, index: u32) -> Self {
        Self { tileset_id, index }
    }
}

/// An ordered stack of tile references at a single coordinate
///
/// Bottom-to-top draw order: the first entry is drawn first, the last entry
/// on top. Cloning a stack copies the list of handles, not the tiles, which
/// is what lets editing commands snapshot a cell at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileStack {
    tiles: Vec<TileRef>,
}

impl TileStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack holding a single tile
    pub fn single(tile: TileRef) -> Self {
        Self { tiles: vec![tile] }
    }

    /// Append a tile on top of the stack
    pub fn push(&mut self, tile: TileRef) {
        self.tiles.push(tile);
    }

    /// Remove the first occurrence of `tile`, returning whether it was present
    pub fn remove(&mut self, tile: TileRef) -> bool {
        match self.tiles.iter().position(|t| *t == tile) {
            Some(pos) => {
                self.tiles.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of tiles in the stack
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the stack holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The topmost tile, if any
    pub fn top(&self) -> Option<TileRef> {
        self.tiles.last().copied()
    }

    /// Iterate bottom-to-top
    pub fn iter(&self) -> impl Iterator<Item = &TileRef> {
        self.tiles.iter()
    }
}

impl FromIterator<TileRef> for TileStack {
    fn from_iter<I: IntoIterator<Item = TileRef>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl Extend<TileRef> for TileStack {
    fn extend<I: IntoIterator<Item = TileRef>>(&mut self, iter: I) {
        self.tiles.extend(iter);
    }
}
