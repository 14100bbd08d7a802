//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the list boundary calls to Dart via FRB: create item, edit
//!   title, delete item, list snapshot.
//! - Keep error semantics simple for early-stage UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - All list access goes through one mutex-guarded session; the core
//!   itself stays single-threaded.

use log::warn;
use todolist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    JsonFileStore, ToDoItemKind, ToDoListService,
};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

const STORE_FILE_NAME: &str = "todolist.json";
static STORE_PATH: OnceLock<PathBuf> = OnceLock::new();
static SESSION: OnceLock<Mutex<ToDoListService<JsonFileStore>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for list mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Row index the operation applied to (set on success).
    pub index: Option<u32>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl EntryActionResponse {
    fn success(message: impl Into<String>, index: usize) -> Self {
        Self {
            ok: true,
            index: Some(index as u32),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            index: None,
            message: message.into(),
        }
    }
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// Word-capitalized title text.
    pub display_title: String,
    /// Icon asset identifier (`icon_0` / `icon_1` / `icon_2`).
    pub icon_asset: String,
    /// Priority marker color as `#rrggbb`.
    pub color_hex: String,
}

/// Snapshot response for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRowsResponse {
    /// Ordered rows, insertion order preserved.
    pub rows: Vec<ListRow>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Creates a new item of the given kind with an empty title.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - `kind` is one of `classwork|homework|game` (case-insensitive).
/// - Never panics.
/// - Returns the appended row index on success.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_create_item(kind: String) -> EntryActionResponse {
    let Some(kind) = parse_kind(&kind) else {
        return EntryActionResponse::failure(format!(
            "unknown item kind `{kind}`; expected classwork|homework|game"
        ));
    };

    match with_session(|service| service.create_item(kind).map_err(|err| err.to_string())) {
        Ok(index) => EntryActionResponse::success(format!("{} created.", kind_label(kind)), index),
        Err(err) => EntryActionResponse::failure(format!("entry_create_item failed: {err}")),
    }
}

/// Replaces the title of the row at `index`.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics.
/// - Out-of-range indices fail without mutating the list.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_edit_title(index: u32, title: String) -> EntryActionResponse {
    match with_session(|service| {
        service
            .update_title(index as usize, title)
            .map_err(|err| err.to_string())
    }) {
        Ok(()) => EntryActionResponse::success("Title updated.", index as usize),
        Err(err) => EntryActionResponse::failure(format!("entry_edit_title failed: {err}")),
    }
}

/// Deletes the row at `index`.
///
/// The host UI decides when to confirm; this call always performs the
/// removal it is asked for.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics.
/// - Out-of-range indices fail without mutating the list.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_delete_item(index: u32) -> EntryActionResponse {
    match with_session(|service| {
        service
            .remove_at(index as usize)
            .map_err(|err| err.to_string())
    }) {
        Ok(removed) => EntryActionResponse::success(
            format!("{} deleted.", kind_label(removed.kind)),
            index as usize,
        ),
        Err(err) => EntryActionResponse::failure(format!("entry_delete_item failed: {err}")),
    }
}

/// Returns the ordered row projections for rendering.
///
/// # FFI contract
/// - Sync call, reads the in-memory list only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_rows() -> ListRowsResponse {
    match with_session(|service| Ok(service.snapshot())) {
        Ok(snapshot) => {
            let rows = snapshot
                .into_iter()
                .map(|row| ListRow {
                    display_title: row.display_title,
                    icon_asset: row.icon.asset_name().to_string(),
                    color_hex: row.color.hex(),
                })
                .collect::<Vec<_>>();
            let message = if rows.is_empty() {
                "List is empty.".to_string()
            } else {
                format!("{} row(s).", rows.len())
            };
            ListRowsResponse { rows, message }
        }
        Err(err) => ListRowsResponse {
            rows: Vec::new(),
            message: format!("list_rows failed: {err}"),
        },
    }
}

fn resolve_store_path() -> PathBuf {
    STORE_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TODOLIST_STORE_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_FILE_NAME)
        })
        .clone()
}

fn with_session<T>(
    f: impl FnOnce(&mut ToDoListService<JsonFileStore>) -> Result<T, String>,
) -> Result<T, String> {
    let session = SESSION.get_or_init(|| {
        let store = JsonFileStore::new(resolve_store_path());
        Mutex::new(ToDoListService::open(store))
    });
    let mut guard = session.lock().map_err(|_| {
        warn!("event=list_session module=ffi status=error error=lock_poisoned");
        "list session lock poisoned".to_string()
    })?;
    f(&mut guard)
}

fn parse_kind(value: &str) -> Option<ToDoItemKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "classwork" => Some(ToDoItemKind::Classwork),
        "homework" => Some(ToDoItemKind::Homework),
        "game" => Some(ToDoItemKind::Game),
        _ => None,
    }
}

fn kind_label(kind: ToDoItemKind) -> &'static str {
    match kind {
        ToDoItemKind::Classwork => "Classwork",
        ToDoItemKind::Homework => "Homework",
        ToDoItemKind::Game => "Game",
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, entry_create_item, entry_delete_item, entry_edit_title, init_logging,
        list_rows, ping,
    };
    use std::sync::{Mutex, OnceLock};
    use std::time::{SystemTime, UNIX_EPOCH};

    // Flow tests share one process-wide list session; serialize them so
    // row indices stay stable between calls.
    fn flow_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn entry_create_item_rejects_unknown_kind() {
        let response = entry_create_item("chores".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("unknown item kind"));
    }

    #[test]
    fn entry_edit_title_out_of_range_fails() {
        let response = entry_edit_title(u32::MAX, "anything".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("out of range"));
    }

    #[test]
    fn entry_delete_item_out_of_range_fails() {
        let response = entry_delete_item(u32::MAX);
        assert!(!response.ok);
        assert!(response.message.contains("out of range"));
    }

    #[test]
    fn entry_flow_creates_edits_and_lists() {
        let _serial = flow_guard().lock().unwrap();

        let created = entry_create_item("homework".to_string());
        assert!(created.ok, "{}", created.message);
        let index = created.index.expect("create should return an index");

        let token = unique_token("ffi flow");
        let edited = entry_edit_title(index, token.clone());
        assert!(edited.ok, "{}", edited.message);

        let expected_title = capitalize_token(&token);
        let response = list_rows();
        let row = response
            .rows
            .iter()
            .find(|row| row.display_title == expected_title)
            .expect("edited row should be listed");
        assert_eq!(row.icon_asset, "icon_0");
        assert_eq!(row.color_hex, "#05e177");
    }

    #[test]
    fn entry_flow_delete_removes_created_row() {
        let _serial = flow_guard().lock().unwrap();

        let created = entry_create_item("game".to_string());
        assert!(created.ok, "{}", created.message);
        let index = created.index.expect("create should return an index");

        let token = unique_token("ffi delete");
        assert!(entry_edit_title(index, token.clone()).ok);

        let deleted = entry_delete_item(index);
        assert!(deleted.ok, "{}", deleted.message);
        assert!(deleted.message.contains("Game"));

        let expected_title = capitalize_token(&token);
        let remaining = list_rows();
        assert!(remaining
            .rows
            .iter()
            .all(|row| row.display_title != expected_title));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix} {nanos}")
    }

    fn capitalize_token(token: &str) -> String {
        token
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
