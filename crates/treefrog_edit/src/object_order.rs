//! Z-order reordering command for object layers

use crate::Command;
use tracing::warn;
use treefrog_core::{ObjectLayer, Project};
use uuid::Uuid;

/// A relative (forward/backward) move captured at queue time
#[derive(Debug, Clone, Copy)]
struct RelativeMove {
    id: Uuid,
    original_index: usize,
    target_index: usize,
}

/// One applied move, recorded at execute time for undo/redo replay
#[derive(Debug, Clone, Copy)]
struct MoveRecord {
    id: Uuid,
    previous_index: usize,
    new_index: usize,
}

/// Reorders a set of objects within an object layer's z-order
///
/// Front/back moves and relative moves are queued independently; each object
/// carries at most one pending operation (queuing it again replaces the
/// previous one). `execute` resolves everything into a single coherent final
/// ordering:
///
/// 1. Back moves, sorted by current index, take slots `0..k`.
/// 2. Relative-move targets shift up by `k` (the back moves inserted ahead
///    of them), then replay sorted by their queue-time index.
/// 3. Front moves, sorted by current index, each move to the last slot, so
///    the highest-indexed one ends up frontmost.
///
/// The move order and tie-breaks are load-bearing: changing them changes the
/// final ordering. The applied moves are recorded so undo and redo replay
/// exact indices; they assume the layer's object count is unchanged between
/// cycles.
pub struct ObjectOrderCommand {
    level_id: Uuid,
    layer_index: usize,
    description: String,
    to_back: Vec<Uuid>,
    to_front: Vec<Uuid>,
    relative: Vec<RelativeMove>,
    applied: Vec<MoveRecord>,
}

impl ObjectOrderCommand {
    /// Create an empty reorder batch targeting an object layer
    pub fn new(level_id: Uuid, layer_index: usize, description: impl Into<String>) -> Self {
        Self {
            level_id,
            layer_index,
            description: description.into(),
            to_back: Vec::new(),
            to_front: Vec::new(),
            relative: Vec::new(),
            applied: Vec::new(),
        }
    }

    /// True iff no moves are queued
    pub fn is_empty(&self) -> bool {
        self.to_back.is_empty() && self.to_front.is_empty() && self.relative.is_empty()
    }

    /// Drop any pending operation for `id` (one pending operation per object)
    fn clear_pending(&mut self, id: Uuid) {
        self.to_back.retain(|&other| other != id);
        self.to_front.retain(|&other| other != id);
        self.relative.retain(|m| m.id != id);
    }

    /// Queue moving an object one slot toward the front
    ///
    /// Returns `false` if the object is not on the layer.
    pub fn queue_move_forward(&mut self, layer: &ObjectLayer, id: Uuid) -> bool {
        let Some(current) = layer.object_index(id) else {
            return false;
        };
        self.clear_pending(id);
        let last = layer.object_count().saturating_sub(1);
        self.relative.push(RelativeMove {
            id,
            original_index: current,
            target_index: (current + 1).min(last),
        });
        true
    }

    /// Queue moving an object one slot toward the back
    pub fn queue_move_backward(&mut self, layer: &ObjectLayer, id: Uuid) -> bool {
        let Some(current) = layer.object_index(id) else {
            return false;
        };
        self.clear_pending(id);
        self.relative.push(RelativeMove {
            id,
            original_index: current,
            target_index: current.saturating_sub(1),
        });
        true
    }

    /// Queue moving an object to the very front (drawn last)
    pub fn queue_move_front(&mut self, layer: &ObjectLayer, id: Uuid) -> bool {
        if layer.object_index(id).is_none() {
            return false;
        }
        self.clear_pending(id);
        self.to_front.push(id);
        true
    }

    /// Queue moving an object to the very back (drawn first)
    pub fn queue_move_back(&mut self, layer: &ObjectLayer, id: Uuid) -> bool {
        if layer.object_index(id).is_none() {
            return false;
        }
        self.clear_pending(id);
        self.to_back.push(id);
        true
    }

    fn target<'a>(&self, project: &'a mut Project) -> Option<&'a mut ObjectLayer> {
        let Some(level) = project.level_mut(self.level_id) else {
            warn!(level_id = %self.level_id, "object order target level is gone, skipping");
            return None;
        };
        let Some(layer) = level.object_layer_mut(self.layer_index) else {
            warn!(
                level_id = %self.level_id,
                layer_index = self.layer_index,
                "object order target is not an object layer, skipping"
            );
            return None;
        };
        Some(layer)
    }

    /// Resolve queued moves against the layer's current state
    fn plan(&self, layer: &ObjectLayer) -> Vec<MoveRecord> {
        let count = layer.object_count();
        if count == 0 {
            return Vec::new();
        }
        let last = count - 1;
        let mut moves = Vec::new();

        // Back moves claim slots 0..k in ascending current-index order
        let mut back: Vec<(Uuid, usize)> = self
            .to_back
            .iter()
            .filter_map(|&id| layer.object_index(id).map(|i| (id, i)))
            .collect();
        back.sort_by_key(|&(_, index)| index);
        let back_count = back.len();
        for (slot, (id, previous_index)) in back.into_iter().enumerate() {
            moves.push(MoveRecord {
                id,
                previous_index,
                new_index: slot,
            });
        }

        // Relative moves replay in queue-time index order, shifted past the
        // back moves that now occupy the head of the list
        let mut relative: Vec<RelativeMove> = self
            .relative
            .iter()
            .copied()
            .filter(|m| layer.object_index(m.id).is_some())
            .collect();
        relative.sort_by_key(|m| m.original_index);
        for m in relative {
            moves.push(MoveRecord {
                id: m.id,
                previous_index: m.original_index,
                new_index: m.target_index + back_count,
            });
        }

        // Front moves each take the last slot; the one with the highest
        // current index moves last and so ends up frontmost
        let mut front: Vec<(Uuid, usize)> = self
            .to_front
            .iter()
            .filter_map(|&id| layer.object_index(id).map(|i| (id, i)))
            .collect();
        front.sort_by_key(|&(_, index)| index);
        for (id, previous_index) in front {
            moves.push(MoveRecord {
                id,
                previous_index,
                new_index: last,
            });
        }

        moves
    }
}

impl Command for ObjectOrderCommand {
    fn execute(&mut self, project: &mut Project) {
        let Some(layer) = self.target(project) else {
            return;
        };
        let moves = self.plan(layer);
        for m in &moves {
            layer.move_to_index(m.id, m.new_index);
        }
        self.applied = moves;
    }

    fn undo(&mut self, project: &mut Project) {
        let Some(layer) = self.target(project) else {
            return;
        };
        for m in &self.applied {
            layer.move_to_index(m.id, m.previous_index);
        }
    }

    fn redo(&mut self, project: &mut Project) {
        let Some(layer) = self.target(project) else {
            return;
        };
        for m in &self.applied {
            layer.move_to_index(m.id, m.new_index);
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}
