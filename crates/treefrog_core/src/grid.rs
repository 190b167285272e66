//! Sparse tile grid layer

use crate::{TileCoord, TileStack};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A sparse tile grid mapping coordinates to tile stacks
///
/// Cells are only stored while occupied; an absent entry is an empty cell.
/// The layer has a rectangular valid range in tile units, checked by
/// [`in_range`](Self::in_range) independently of occupancy. Writes outside
/// the range are ignored - editing commands may have been queued against a
/// stale extent and must degrade gracefully rather than fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiTileGridLayer {
    width: u32,
    height: u32,
    /// Occupied cells only - empty stacks are never stored
    ///
    /// Serialized as a sequence of `(coord, stack)` pairs because JSON map
    /// keys must be strings.
    #[serde(with = "cells_as_pairs")]
    cells: HashMap<TileCoord, TileStack>,
}

mod cells_as_pairs {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        cells: &HashMap<TileCoord, TileStack>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(cells.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<HashMap<TileCoord, TileStack>, D::Error> {
        let pairs = Vec::<(TileCoord, TileStack)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

impl MultiTileGridLayer {
    /// Create an empty grid layer of the given extent
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: HashMap::new(),
        }
    }

    /// Layer width in tile units
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Layer height in tile units
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `coord` lies inside the layer's extent
    pub fn in_range(&self, coord: TileCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    /// Get the stack at `coord`, or `None` for empty or out-of-range cells
    pub fn get(&self, coord: TileCoord) -> Option<&TileStack> {
        self.cells.get(&coord)
    }

    /// Replace the stack at `coord` wholesale
    ///
    /// `None` or an empty stack clears the cell. Out-of-range coordinates
    /// are silently ignored.
    pub fn set(&mut self, coord: TileCoord, stack: Option<TileStack>) {
        if !self.in_range(coord) {
            return;
        }
        match stack {
            Some(stack) if !stack.is_empty() => {
                self.cells.insert(coord, stack);
            }
            _ => {
                self.cells.remove(&coord);
            }
        }
    }

    /// Clear the cell at `coord`
    pub fn clear(&mut self, coord: TileCoord) {
        self.cells.remove(&coord);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over occupied cells in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, &TileStack)> {
        self.cells.iter().map(|(coord, stack)| (*coord, stack))
    }

    /// Resize the layer, dropping cells that fall outside the new extent
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.cells
            .retain(|coord, _| (coord.x as u32) < width && (coord.y as u32) < height);
    }
}
