//! Batched tile-stack replacement command

use crate::Command;
use std::collections::HashMap;
use tracing::{debug, warn};
use treefrog_core::{MultiTileGridLayer, Project, TileCoord, TileRef, TileStack};
use uuid::Uuid;

/// Per-coordinate edit record
///
/// The original is captured the first time a coordinate is queued and never
/// overwritten afterwards; the replacement tracks the latest queued state.
#[derive(Debug, Clone)]
struct CellEdit {
    original: Option<TileStack>,
    replacement: Option<TileStack>,
}

/// A batch of per-coordinate tile-stack replacements
///
/// Edits are queued against the live grid (each queue operation snapshots
/// the current cell contents by copy), then applied atomically by
/// [`execute`](Command::execute). Queuing twice on the same coordinate keeps
/// the first captured original and the last queued replacement.
///
/// Range checks happen at apply time, not queue time: a command queued
/// against one layer extent and executed after a resize skips the
/// coordinates that fell out of range instead of failing.
pub struct TileReplaceCommand {
    level_id: Uuid,
    layer_index: usize,
    description: String,
    cells: HashMap<TileCoord, CellEdit>,
}

impl TileReplaceCommand {
    /// Create an empty batch targeting a tile layer
    pub fn new(level_id: Uuid, layer_index: usize, description: impl Into<String>) -> Self {
        Self {
            level_id,
            layer_index,
            description: description.into(),
            cells: HashMap::new(),
        }
    }

    /// True iff no coordinates are queued
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of queued coordinates
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Record a replacement for `coord`, preserving the first-captured original
    fn queue(&mut self, layer: &MultiTileGridLayer, coord: TileCoord, replacement: Option<TileStack>) {
        match self.cells.get_mut(&coord) {
            Some(edit) => edit.replacement = replacement,
            None => {
                self.cells.insert(
                    coord,
                    CellEdit {
                        original: layer.get(coord).cloned(),
                        replacement,
                    },
                );
            }
        }
    }

    /// Working copy of the cell as it would be after the queued edits so far
    /// have *not* been applied: always the live grid contents.
    fn working_copy(layer: &MultiTileGridLayer, coord: TileCoord) -> TileStack {
        layer.get(coord).cloned().unwrap_or_default()
    }

    /// Queue appending a tile onto the stack at `coord`
    pub fn queue_add(&mut self, layer: &MultiTileGridLayer, coord: TileCoord, tile: TileRef) {
        let mut stack = Self::working_copy(layer, coord);
        stack.push(tile);
        self.queue(layer, coord, Some(stack));
    }

    /// Queue appending all tiles of `stack` onto the stack at `coord`
    pub fn queue_add_stack(
        &mut self,
        layer: &MultiTileGridLayer,
        coord: TileCoord,
        stack: &TileStack,
    ) {
        let mut working = Self::working_copy(layer, coord);
        working.extend(stack.iter().copied());
        self.queue(layer, coord, Some(working));
    }

    /// Queue removing the first occurrence of `tile` from the stack at `coord`
    pub fn queue_remove(&mut self, layer: &MultiTileGridLayer, coord: TileCoord, tile: TileRef) {
        let mut stack = Self::working_copy(layer, coord);
        stack.remove(tile);
        self.queue(layer, coord, Some(stack));
    }

    /// Queue replacing the entire stack at `coord`
    ///
    /// `None` or an empty stack clears the cell.
    pub fn queue_replacement(
        &mut self,
        layer: &MultiTileGridLayer,
        coord: TileCoord,
        stack: Option<TileStack>,
    ) {
        self.queue(layer, coord, stack);
    }

    fn target<'a>(&self, project: &'a mut Project) -> Option<&'a mut MultiTileGridLayer> {
        let Some(level) = project.level_mut(self.level_id) else {
            warn!(level_id = %self.level_id, "tile replace target level is gone, skipping");
            return None;
        };
        let Some(grid) = level.tile_layer_mut(self.layer_index) else {
            warn!(
                level_id = %self.level_id,
                layer_index = self.layer_index,
                "tile replace target is not a tile layer, skipping"
            );
            return None;
        };
        Some(grid)
    }

    /// Write one side of every queued edit into the grid
    fn apply(&self, grid: &mut MultiTileGridLayer, restore_original: bool) {
        for (coord, edit) in &self.cells {
            if !grid.in_range(*coord) {
                debug!(coord = %coord, "cell out of range at apply time, skipping");
                continue;
            }
            let stack = if restore_original {
                &edit.original
            } else {
                &edit.replacement
            };
            grid.set(*coord, stack.clone());
        }
    }
}

impl Command for TileReplaceCommand {
    fn execute(&mut self, project: &mut Project) {
        if let Some(grid) = self.target(project) {
            self.apply(grid, false);
        }
    }

    fn undo(&mut self, project: &mut Project) {
        if let Some(grid) = self.target(project) {
            self.apply(grid, true);
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use treefrog_core::{Layer, Level};

    fn tile(index: u32) -> TileRef {
        TileRef::new(Uuid::nil(), index)
    }

    fn project_with_grid(width: u32, height: u32) -> (Project, Uuid) {
        let mut level = Level::new("Test", width, height);
        level.add_layer(Layer::new_tile_layer("Ground", width, height));
        let id = level.id;
        (Project::new(level), id)
    }

    fn grid(project: &Project, level_id: Uuid) -> &MultiTileGridLayer {
        project.level(level_id).unwrap().tile_layer(0).unwrap()
    }

    fn grid_mut(project: &mut Project, level_id: Uuid) -> &mut MultiTileGridLayer {
        project
            .level_mut(level_id)
            .unwrap()
            .tile_layer_mut(0)
            .unwrap()
    }

    /// Cell-by-cell snapshot of the grid for exact-state comparison
    fn snapshot(grid: &MultiTileGridLayer) -> HashMap<TileCoord, TileStack> {
        grid.iter().map(|(c, s)| (c, s.clone())).collect()
    }

    #[test]
    fn test_queue_add_execute_undo() {
        let (mut project, level_id) = project_with_grid(4, 4);
        let coord = TileCoord::new(1, 1);

        let mut cmd = TileReplaceCommand::new(level_id, 0, "Paint");
        assert!(cmd.is_empty());
        cmd.queue_add(grid(&project, level_id), coord, tile(7));
        assert!(!cmd.is_empty());

        cmd.execute(&mut project);
        let stack = grid(&project, level_id).get(coord).unwrap();
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![tile(7)]);
        assert_eq!(grid(&project, level_id).occupied_count(), 1);

        cmd.undo(&mut project);
        assert!(grid(&project, level_id).get(coord).is_none());
        assert_eq!(grid(&project, level_id).occupied_count(), 0);
    }

    #[test]
    fn test_clear_then_undo_restores_stack() {
        let (mut project, level_id) = project_with_grid(4, 4);
        let coord = TileCoord::new(1, 1);

        let mut paint = TileReplaceCommand::new(level_id, 0, "Paint");
        paint.queue_add(grid(&project, level_id), coord, tile(7));
        paint.execute(&mut project);

        let mut erase = TileReplaceCommand::new(level_id, 0, "Erase");
        erase.queue_replacement(grid(&project, level_id), coord, None);
        erase.execute(&mut project);
        assert!(grid(&project, level_id).get(coord).is_none());

        erase.undo(&mut project);
        let stack = grid(&project, level_id).get(coord).unwrap();
        assert_eq!(stack.top(), Some(tile(7)));
    }

    #[test]
    fn test_undo_restores_exact_state_for_mixed_queue() {
        let (mut project, level_id) = project_with_grid(8, 8);

        // Pre-populate a few cells
        {
            let grid = grid_mut(&mut project, level_id);
            grid.set(TileCoord::new(0, 0), Some(TileStack::single(tile(1))));
            grid.set(
                TileCoord::new(1, 0),
                Some([tile(2), tile(3)].into_iter().collect()),
            );
            grid.set(TileCoord::new(2, 2), Some(TileStack::single(tile(4))));
        }
        let before = snapshot(grid(&project, level_id));

        let mut cmd = TileReplaceCommand::new(level_id, 0, "Edit");
        let g = grid(&project, level_id);
        cmd.queue_add(g, TileCoord::new(0, 0), tile(9));
        cmd.queue_remove(g, TileCoord::new(1, 0), tile(2));
        cmd.queue_replacement(g, TileCoord::new(2, 2), Some(TileStack::single(tile(8))));
        cmd.queue_replacement(g, TileCoord::new(3, 3), Some(TileStack::single(tile(5))));
        cmd.queue_add_stack(
            g,
            TileCoord::new(4, 4),
            &[tile(6), tile(7)].into_iter().collect(),
        );

        cmd.execute(&mut project);
        let after = snapshot(grid(&project, level_id));
        assert_ne!(before, after);

        cmd.undo(&mut project);
        assert_eq!(snapshot(grid(&project, level_id)), before);

        cmd.redo(&mut project);
        assert_eq!(snapshot(grid(&project, level_id)), after);

        // Alternating undo/redo stays exact
        cmd.undo(&mut project);
        cmd.redo(&mut project);
        assert_eq!(snapshot(grid(&project, level_id)), after);
    }

    #[test]
    fn test_first_original_last_replacement() {
        let (mut project, level_id) = project_with_grid(4, 4);
        let coord = TileCoord::new(2, 2);
        grid_mut(&mut project, level_id).set(coord, Some(TileStack::single(tile(1))));

        let mut cmd = TileReplaceCommand::new(level_id, 0, "Replace");
        let g = grid(&project, level_id);
        cmd.queue_replacement(g, coord, Some(TileStack::single(tile(2))));
        cmd.queue_replacement(g, coord, Some(TileStack::single(tile(3))));
        assert_eq!(cmd.len(), 1);

        cmd.execute(&mut project);
        // Last queued replacement wins
        assert_eq!(
            grid(&project, level_id).get(coord).unwrap().top(),
            Some(tile(3))
        );

        cmd.undo(&mut project);
        // First captured original wins, not the intermediate queued value
        assert_eq!(
            grid(&project, level_id).get(coord).unwrap().top(),
            Some(tile(1))
        );
    }

    #[test]
    fn test_queue_add_reads_live_grid_not_queued_replacement() {
        let (mut project, level_id) = project_with_grid(4, 4);
        let coord = TileCoord::new(0, 0);
        grid_mut(&mut project, level_id).set(coord, Some(TileStack::single(tile(1))));

        let mut cmd = TileReplaceCommand::new(level_id, 0, "Paint");
        let g = grid(&project, level_id);
        cmd.queue_add(g, coord, tile(2));
        cmd.queue_add(g, coord, tile(3));

        cmd.execute(&mut project);
        // The second queue_add snapshotted the live cell again, so the
        // replacement is [1, 3], not [1, 2, 3]
        let stack = grid(&project, level_id).get(coord).unwrap();
        assert_eq!(
            stack.iter().copied().collect::<Vec<_>>(),
            vec![tile(1), tile(3)]
        );
    }

    #[test]
    fn test_queued_stack_is_snapshot_not_shared() {
        let (mut project, level_id) = project_with_grid(4, 4);
        let coord = TileCoord::new(0, 0);

        let mut source: TileStack = TileStack::single(tile(1));
        let mut cmd = TileReplaceCommand::new(level_id, 0, "Paint");
        cmd.queue_add_stack(grid(&project, level_id), coord, &source);

        // Mutating the caller's stack after queuing must not leak in
        source.push(tile(9));

        cmd.execute(&mut project);
        assert_eq!(grid(&project, level_id).get(coord).unwrap().len(), 1);
    }

    #[test]
    fn test_out_of_range_coordinate_is_untouched() {
        let (mut project, level_id) = project_with_grid(4, 4);
        let outside = TileCoord::new(10, 10);

        let mut cmd = TileReplaceCommand::new(level_id, 0, "Paint");
        cmd.queue_add(grid(&project, level_id), outside, tile(1));

        cmd.execute(&mut project);
        assert!(grid(&project, level_id).get(outside).is_none());
        assert_eq!(grid(&project, level_id).occupied_count(), 0);

        cmd.undo(&mut project);
        assert_eq!(grid(&project, level_id).occupied_count(), 0);
    }

    #[test]
    fn test_resize_between_execute_and_undo_degrades_gracefully() {
        let (mut project, level_id) = project_with_grid(8, 8);
        let inside = TileCoord::new(1, 1);
        let edge = TileCoord::new(6, 6);

        let mut cmd = TileReplaceCommand::new(level_id, 0, "Paint");
        let g = grid(&project, level_id);
        cmd.queue_add(g, inside, tile(1));
        cmd.queue_add(g, edge, tile(2));
        cmd.execute(&mut project);

        // The layer shrinks; (6,6) is now out of range
        grid_mut(&mut project, level_id).resize(4, 4);

        cmd.undo(&mut project);
        assert!(grid(&project, level_id).get(inside).is_none());

        cmd.redo(&mut project);
        // Only the in-range cell comes back
        assert!(grid(&project, level_id).get(inside).is_some());
        assert!(grid(&project, level_id).get(edge).is_none());
    }

    #[test]
    fn test_missing_level_is_a_silent_skip() {
        let (mut project, _) = project_with_grid(4, 4);
        let mut cmd = TileReplaceCommand::new(Uuid::new_v4(), 0, "Paint");
        // Queue against a detached grid, then execute against a project
        // that has no such level
        let detached = MultiTileGridLayer::new(4, 4);
        cmd.queue_add(&detached, TileCoord::new(0, 0), tile(1));

        cmd.execute(&mut project);
        cmd.undo(&mut project);
        // Nothing to assert beyond "did not panic and touched nothing"
        assert_eq!(project.levels[0].tile_layer(0).unwrap().occupied_count(), 0);
    }
}
