use crate::error::UndoError;

use super::{BoardState, Scoreboard};

impl Scoreboard {
    /// Pushes a pre-mutation snapshot, evicting the oldest past the
    /// configured depth.
    ///
    /// Callers must have validated all preconditions first: a snapshot is
    /// only taken for an operation that will mutate.
    pub(crate) fn push_snapshot(&self, state: &BoardState) {
        let mut history = self.history.lock();
        history.push(state.clone());
        while history.len() > self.options.undo_depth {
            history.remove(0);
        }
    }

    /// Returns the number of retained undo snapshots.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.lock().len()
    }

    /// Restores the most recent snapshot, replacing the state wholesale.
    ///
    /// Undo never pushes onto the history itself, so it cannot be undone
    /// beyond the retained depth.
    ///
    /// # Errors
    ///
    /// Returns an error if there is nothing to undo.
    pub fn undo(&self) -> Result<(), UndoError> {
        let mut state = self.state.lock();
        let mut history = self.history.lock();
        let previous = history.pop().ok_or(UndoError::NothingToUndo)?;
        *state = previous;
        Ok(())
    }
}
