//! Command-based undo/redo engine for the Treefrog editing core
//!
//! Edits are expressed as [`Command`] objects: queued with snapshots of the
//! cells or indices they touch, executed once through a [`CommandHistory`],
//! then undone and redone any number of times. Commands re-check their
//! targets on every apply, so edits queued against a stale layer extent
//! degrade to partial no-ops instead of failing.

mod command;
mod history;
mod object_order;
mod tile_replace;

pub use command::Command;
pub use history::{CommandHistory, DEFAULT_HISTORY_LIMIT};
pub use object_order::ObjectOrderCommand;
pub use tile_replace::TileReplaceCommand;
