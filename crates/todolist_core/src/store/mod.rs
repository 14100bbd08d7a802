//! List persistence layer.
//!
//! # Responsibility
//! - Define the store contract for mirroring the item sequence to disk.
//! - Keep serialization details inside the core persistence boundary.
//!
//! # Invariants
//! - Every save is a full rewrite of the whole ordered sequence.
//! - Load never returns a partially decoded list; it succeeds with the
//!   complete sequence or fails with a typed error.

use crate::model::item::ToDoItem;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_file;
mod memory;

pub use json_file::{JsonFileStore, SCHEMA_VERSION};
pub use memory::MemoryListStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for the list store.
#[derive(Debug)]
pub enum StoreError {
    /// File system failure while reading or writing the store file.
    Io(std::io::Error),
    /// The in-memory list could not be encoded.
    Serialize(serde_json::Error),
    /// The persisted file exists but does not decode as a stored list.
    Deserialize(serde_json::Error),
    /// The persisted file was written by a newer schema than this binary
    /// understands.
    UnsupportedSchemaVersion {
        file_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store i/o failure: {err}"),
            Self::Serialize(err) => write!(f, "store encode failure: {err}"),
            Self::Deserialize(err) => write!(f, "store decode failure: {err}"),
            Self::UnsupportedSchemaVersion {
                file_version,
                latest_supported,
            } => write!(
                f,
                "stored list schema version {file_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) | Self::Deserialize(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl StoreError {
    /// Whether this load failure means "no list has been saved yet".
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Store contract for the ordered item sequence.
///
/// Implementations persist and restore the entire list in one shot; there
/// is no incremental update path.
pub trait ListStore {
    /// Reads the full ordered sequence from the backing store.
    fn load(&self) -> StoreResult<Vec<ToDoItem>>;

    /// Replaces the backing store content with `items`, preserving order.
    fn save(&self, items: &[ToDoItem]) -> StoreResult<()>;
}

impl<S: ListStore + ?Sized> ListStore for &S {
    fn load(&self) -> StoreResult<Vec<ToDoItem>> {
        (**self).load()
    }

    fn save(&self, items: &[ToDoItem]) -> StoreResult<()> {
        (**self).save(items)
    }
}
