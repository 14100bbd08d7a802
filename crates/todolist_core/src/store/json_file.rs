//! File-backed list store using a versioned JSON document.
//!
//! # Responsibility
//! - Mirror the item sequence to a single file at a fixed path.
//! - Keep the on-disk format self-describing and forward-checkable.
//!
//! # Invariants
//! - Saves go through a sibling temp file plus rename, so a crash
//!   mid-write never leaves a truncated store behind.
//! - Files with a `schema_version` newer than [`SCHEMA_VERSION`] are
//!   rejected on load instead of being decoded best-effort.

use super::{ListStore, StoreError, StoreResult};
use crate::model::item::ToDoItem;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Current on-disk document version.
pub const SCHEMA_VERSION: u32 = 1;

/// Wire shape of the persisted file.
#[derive(Debug, Serialize, Deserialize)]
struct StoredList {
    schema_version: u32,
    items: Vec<ToDoItem>,
}

/// List store writing the whole sequence to one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store bound to `path`. The file itself is created on the
    /// first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> StoreResult<StoredList> {
        let raw = fs::read_to_string(&self.path)?;
        let document: StoredList =
            serde_json::from_str(&raw).map_err(StoreError::Deserialize)?;
        if document.schema_version > SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchemaVersion {
                file_version: document.schema_version,
                latest_supported: SCHEMA_VERSION,
            });
        }
        Ok(document)
    }

    fn write_document(&self, items: &[ToDoItem]) -> StoreResult<()> {
        let document = StoredList {
            schema_version: SCHEMA_VERSION,
            items: items.to_vec(),
        };
        let json =
            serde_json::to_string_pretty(&document).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Full rewrite through a sibling temp file; rename replaces the
        // previous store content in one step.
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl ListStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<ToDoItem>> {
        let started_at = Instant::now();

        match self.read_document() {
            Ok(document) => {
                info!(
                    "event=store_load module=store status=ok items={} duration_ms={}",
                    document.items.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(document.items)
            }
            // No file yet is the normal first-launch case, not a failure.
            Err(err) if err.is_missing_file() => {
                info!(
                    "event=store_load module=store status=absent path={}",
                    self.path.display()
                );
                Err(err)
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn save(&self, items: &[ToDoItem]) -> StoreResult<()> {
        let started_at = Instant::now();

        match self.write_document(items) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok items={} duration_ms={}",
                    items.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
