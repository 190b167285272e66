//! Tile-map document model and undo/redo command engine
//!
//! Re-exports the two building blocks of the Treefrog editing core:
//! - [`treefrog_core`] - levels, tile grids, object layers, properties
//! - [`treefrog_edit`] - reversible commands and the history stack
//!
//! # Example
//!
//! ```
//! use treefrog::{
//!     CommandHistory, Layer, Level, Project, TileCoord, TileRef, TileReplaceCommand,
//! };
//! use uuid::Uuid;
//!
//! let mut level = Level::new("Overworld", 16, 16);
//! level.add_layer(Layer::new_tile_layer("Ground", 16, 16));
//! let level_id = level.id;
//! let mut project = Project::new(level);
//! let mut history = CommandHistory::new();
//!
//! let tile = TileRef::new(Uuid::new_v4(), 3);
//! let mut paint = TileReplaceCommand::new(level_id, 0, "Paint");
//! paint.queue_add(
//!     project.level(level_id).unwrap().tile_layer(0).unwrap(),
//!     TileCoord::new(2, 2),
//!     tile,
//! );
//! history.execute(Box::new(paint), &mut project);
//!
//! assert!(history.can_undo());
//! history.undo(&mut project);
//! assert!(project
//!     .level(level_id)
//!     .unwrap()
//!     .tile_layer(0)
//!     .unwrap()
//!     .get(TileCoord::new(2, 2))
//!     .is_none());
//! ```

pub use treefrog_core::*;
pub use treefrog_edit::*;
