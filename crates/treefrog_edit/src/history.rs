//! Undo/redo history stack

use crate::Command;
use std::collections::VecDeque;
use tracing::debug;
use treefrog_core::Project;

/// Maximum number of commands kept by default
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Bounded undo/redo stack of executed commands
///
/// [`execute`](Self::execute) runs a command and pushes it; anything on the
/// redo side is discarded at that point. When the undo side exceeds the
/// limit the oldest command is evicted.
pub struct CommandHistory {
    undo_stack: VecDeque<Box<dyn Command>>,
    redo_stack: Vec<Box<dyn Command>>,
    limit: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    /// Create a history with the default depth limit
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a history keeping at most `limit` commands
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    /// Execute a command and push it onto the history
    pub fn execute(&mut self, mut command: Box<dyn Command>, project: &mut Project) {
        debug!(description = command.description(), "execute");
        command.execute(project);
        self.redo_stack.clear();
        self.undo_stack.push_back(command);
        if self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
    }

    /// Whether there is a command to undo
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether there is a command to redo
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undo the most recent command, returning whether anything was undone
    pub fn undo(&mut self, project: &mut Project) -> bool {
        let Some(mut command) = self.undo_stack.pop_back() else {
            return false;
        };
        debug!(description = command.description(), "undo");
        command.undo(project);
        self.redo_stack.push(command);
        true
    }

    /// Redo the most recently undone command
    pub fn redo(&mut self, project: &mut Project) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        debug!(description = command.description(), "redo");
        command.redo(project);
        self.undo_stack.push_back(command);
        true
    }

    /// Label of the command `undo` would roll back
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.back().map(|c| c.description())
    }

    /// Label of the command `redo` would reapply
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.description())
    }

    /// Drop all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
