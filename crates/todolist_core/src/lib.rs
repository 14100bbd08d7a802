//! Core domain logic for the to-do list app.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Icon, Priority, Rgb, ToDoItem, ToDoItemKind};
pub use service::list_service::{ItemSnapshot, ListError, ListResult, ToDoListService};
pub use store::{JsonFileStore, ListStore, MemoryListStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
