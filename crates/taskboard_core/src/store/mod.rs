//! Storage backends behind one capability interface.
//!
//! # Responsibility
//! - Define the `Store` contract shared by every backend.
//! - Select the configured backend at construction time, not at compile time.
//!
//! # Invariants
//! - `list` preserves insertion order on every backend.
//! - Documents are opaque JSON at this layer; typing belongs to the
//!   repository layer.
//! - Meta values are overwritten unconditionally; last writer wins.

mod local;
mod sqlite;

pub use local::LocalStore;
pub use sqlite::SqliteStore;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Meta key holding the currently selected project id.
pub const ACTIVE_PROJECT_KEY: &str = "active_project";

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level storage error shared by all backends.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Sqlite(rusqlite::Error),
    /// A document could not be serialized before persistence.
    Serialize(serde_json::Error),
    /// Persisted data could not be decoded; the stored entry is corrupt.
    Deserialize { entry: String, message: String },
    /// The collection name has no backing storage.
    UnknownCollection(String),
    /// The on-disk schema is newer than this binary supports.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize document: {err}"),
            Self::Deserialize { entry, message } => {
                write!(f, "corrupt stored data in `{entry}`: {message}")
            }
            Self::UnknownCollection(name) => write!(f, "unknown collection: `{name}`"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Sqlite(err) => Some(err),
            Self::Serialize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Capability contract shared by every storage backend.
///
/// Callers are not synchronized: two writers touching the same collection
/// race with last-writer-wins semantics, matching what the backends
/// themselves guarantee.
pub trait Store {
    /// Returns every document in the collection, in insertion order.
    fn list(&self, collection: &str) -> StoreResult<Vec<Value>>;
    /// Appends one document under the given id.
    fn insert(&self, collection: &str, id: &str, doc: &Value) -> StoreResult<()>;
    /// Replaces the document with the same id. Returns `false` when absent.
    fn replace(&self, collection: &str, id: &str, doc: &Value) -> StoreResult<bool>;
    /// Removes the document with the given id. Returns `false` when absent.
    fn remove(&self, collection: &str, id: &str) -> StoreResult<bool>;
    /// Reads one process-wide meta value.
    fn read_meta(&self, key: &str) -> StoreResult<Option<String>>;
    /// Writes one process-wide meta value, overwriting unconditionally.
    fn write_meta(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes one meta value. Missing keys are not an error.
    fn clear_meta(&self, key: &str) -> StoreResult<()>;
}

/// Backend selector, usually read from the `[storage]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// JSON array file per collection.
    Local,
    /// SQLite document tables.
    Sqlite,
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Data directory (local) or database file (sqlite).
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Local,
            path: PathBuf::from("taskboard-data"),
        }
    }
}

/// Opens the backend named by `config`.
pub fn open_store(config: &StoreConfig) -> StoreResult<Box<dyn Store>> {
    match config.backend {
        StoreBackend::Local => Ok(Box::new(LocalStore::open(&config.path)?)),
        StoreBackend::Sqlite => Ok(Box::new(SqliteStore::open(&config.path)?)),
    }
}
