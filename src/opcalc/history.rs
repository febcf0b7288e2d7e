//! # History
//!
//! [`HistoryManager`] owns the ordered log of executed operations and its
//! persisted mirror. Entries are kept in execution order; the only removals are
//! [`undo_last`](HistoryManager::undo_last) (from the end) and
//! [`clear`](HistoryManager::clear).
//!
//! Every mutating call saves the full sequence before returning. When the save
//! fails the in-memory change is reverted, so the caller sees either the new
//! state on both sides or the old state on both sides, plus the error.

use crate::error::Result;
use crate::model::OperationCommand;
use crate::store::HistoryStore;

pub struct HistoryManager<S: HistoryStore> {
    store: S,
    entries: Vec<OperationCommand>,
}

impl<S: HistoryStore> HistoryManager<S> {
    /// Loads the persisted history. A store with nothing saved yields an empty
    /// history.
    pub fn new(store: S) -> Result<Self> {
        let entries = store.load()?;
        log::debug!("History initialized with {} entries", entries.len());
        Ok(Self { store, entries })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, command: OperationCommand) -> Result<()> {
        self.entries.push(command);
        if let Err(e) = self.store.save(&self.entries) {
            log::warn!("Failed to persist new history entry, rolling back: {}", e);
            self.entries.pop();
            return Err(e);
        }
        Ok(())
    }

    /// The last `n` entries, oldest first. Returns everything when `n` exceeds
    /// the history length.
    pub fn get_latest(&self, n: usize) -> &[OperationCommand] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Removes and returns the most recent entry, or `None` when there is
    /// nothing to undo.
    pub fn undo_last(&mut self) -> Result<Option<OperationCommand>> {
        let Some(last) = self.entries.pop() else {
            return Ok(None);
        };
        if let Err(e) = self.store.save(&self.entries) {
            log::warn!("Failed to persist undo, restoring entry: {}", e);
            self.entries.push(last);
            return Err(e);
        }
        log::info!("Undid {}", last);
        Ok(Some(last))
    }

    pub fn clear(&mut self) -> Result<()> {
        let previous = std::mem::take(&mut self.entries);
        if let Err(e) = self.store.save(&self.entries) {
            log::warn!("Failed to persist cleared history, restoring: {}", e);
            self.entries = previous;
            return Err(e);
        }
        log::info!("Cleared {} history entries", previous.len());
        Ok(())
    }

    pub fn get_full(&self) -> &[OperationCommand] {
        &self.entries
    }
}
