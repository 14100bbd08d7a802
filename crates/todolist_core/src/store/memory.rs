//! In-memory list store for tests and UI previews.

use super::{ListStore, StoreError, StoreResult};
use crate::model::item::ToDoItem;
use std::cell::RefCell;

/// Store keeping the persisted sequence in process memory.
///
/// Plays the role the file store plays in production, without touching
/// disk. Write failures can be forced to exercise the caller's
/// failed-save path.
#[derive(Debug, Default)]
pub struct MemoryListStore {
    items: RefCell<Vec<ToDoItem>>,
    fail_writes: RefCell<bool>,
}

impl MemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `items`, as if a previous
    /// session had saved them.
    pub fn with_items(items: Vec<ToDoItem>) -> Self {
        Self {
            items: RefCell::new(items),
            fail_writes: RefCell::new(false),
        }
    }

    /// Makes every subsequent `save` fail until called again with `false`.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }

    /// Returns a copy of the currently persisted sequence.
    pub fn persisted(&self) -> Vec<ToDoItem> {
        self.items.borrow().clone()
    }
}

impl ListStore for MemoryListStore {
    fn load(&self) -> StoreResult<Vec<ToDoItem>> {
        Ok(self.items.borrow().clone())
    }

    fn save(&self, items: &[ToDoItem]) -> StoreResult<()> {
        if *self.fail_writes.borrow() {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "memory store configured to fail writes",
            )));
        }
        *self.items.borrow_mut() = items.to_vec();
        Ok(())
    }
}
