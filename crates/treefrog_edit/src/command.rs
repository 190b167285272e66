//! Reversible editing commands

use treefrog_core::Project;

/// A reversible unit of document mutation
///
/// Commands capture whatever state they need while being queued, execute
/// once, and then live in a [`CommandHistory`](crate::CommandHistory) where
/// undo and redo may be called any number of times in alternation. A command
/// must reproduce identical document state for any call ordering consistent
/// with "execute once, then alternate undo/redo".
///
/// Commands address their target by level id and layer index and re-resolve
/// it on every apply; a target that has since disappeared or shrunk is
/// skipped, not an error.
pub trait Command {
    /// Apply the command to the document
    fn execute(&mut self, project: &mut Project);

    /// Restore the document state captured before `execute`
    fn undo(&mut self, project: &mut Project);

    /// Reapply the command after an undo
    fn redo(&mut self, project: &mut Project) {
        self.execute(project);
    }

    /// Human-readable label for history UIs
    fn description(&self) -> &str;
}
