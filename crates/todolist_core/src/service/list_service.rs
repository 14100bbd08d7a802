//! List use-case service.
//!
//! # Responsibility
//! - Own the in-memory ordered item sequence for the whole process.
//! - Mirror every successful mutation to the backing store in full.
//!
//! # Invariants
//! - The live sequence is never handed out mutably; callers address items
//!   by index and read through snapshots or shared references.
//! - Out-of-range indices fail before any mutation happens.
//! - A failed save leaves the in-memory list authoritative; the next
//!   successful save reconciles the file.

use crate::model::item::{Icon, Rgb, ToDoItem, ToDoItemKind};
use crate::store::{ListStore, StoreError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Service error for list mutations.
#[derive(Debug)]
pub enum ListError {
    /// Caller addressed an index outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// The mutation applied in memory but the store rewrite failed.
    Store(StoreError),
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for list of length {len}")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IndexOutOfRange { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ListError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Row projection handed to the presentation layer for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSnapshot {
    /// Word-capitalized title.
    pub display_title: String,
    /// Priority marker color.
    pub color: Rgb,
    /// Kind icon.
    pub icon: Icon,
}

/// Use-case service owning the item list and its persistence mirror.
pub struct ToDoListService<S: ListStore> {
    store: S,
    items: Vec<ToDoItem>,
}

impl<S: ListStore> ToDoListService<S> {
    /// Opens the service by loading the persisted list once.
    ///
    /// # Contract
    /// - A store with no saved list yet opens empty without logging noise.
    /// - A malformed or unreadable store also opens empty; the failure is
    ///   logged and the file on disk is left untouched until the first
    ///   successful save rewrites it.
    pub fn open(store: S) -> Self {
        let items = match store.load() {
            Ok(items) => items,
            Err(err) if err.is_missing_file() => Vec::new(),
            Err(err) => {
                warn!(
                    "event=list_open module=service status=recovered error={}",
                    err
                );
                Vec::new()
            }
        };
        Self { store, items }
    }

    /// Creates a service over an already-loaded sequence, skipping the
    /// initial store read. Restore/import paths use this.
    pub fn with_items(store: S, items: Vec<ToDoItem>) -> Self {
        Self { store, items }
    }

    /// Appends a freshly created item of `kind` and persists.
    ///
    /// The new item starts with an empty title and `Normal` priority;
    /// returns the index it was placed at.
    pub fn create_item(&mut self, kind: ToDoItemKind) -> ListResult<usize> {
        self.add(ToDoItem::new(kind, ""))?;
        Ok(self.items.len() - 1)
    }

    /// Appends `item` to the end of the sequence and persists.
    pub fn add(&mut self, item: ToDoItem) -> ListResult<()> {
        self.items.push(item);
        self.store.save(&self.items)?;
        Ok(())
    }

    /// Replaces the title of the item at `index` and persists.
    pub fn update_title(&mut self, index: usize, new_title: impl Into<String>) -> ListResult<()> {
        self.check_index(index)?;
        self.items[index].title = new_title.into();
        self.store.save(&self.items)?;
        Ok(())
    }

    /// Removes and returns the item at `index`, then persists.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `index >= len`; the list is not touched.
    /// - `Store` when the removal applied but the rewrite failed.
    pub fn remove_at(&mut self, index: usize) -> ListResult<ToDoItem> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        self.store.save(&self.items)?;
        Ok(removed)
    }

    /// Returns ordered row projections for rendering.
    pub fn snapshot(&self) -> Vec<ItemSnapshot> {
        self.items
            .iter()
            .map(|item| ItemSnapshot {
                display_title: item.display_title(),
                color: item.color(),
                icon: item.icon(),
            })
            .collect()
    }

    /// Shared view of the live sequence, in display/storage order.
    pub fn items(&self) -> &[ToDoItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ToDoItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check_index(&self, index: usize) -> ListResult<()> {
        if index >= self.items.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}
