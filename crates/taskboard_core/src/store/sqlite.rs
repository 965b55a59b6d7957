//! SQLite document-collection backend.
//!
//! # Responsibility
//! - Open file or in-memory SQLite stores and apply schema migrations.
//! - Persist one row per document with the row id equal to the entity id.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - `list` order follows `rowid`, i.e. insertion order.
//! - Collection names are resolved against a fixed table registry; raw
//!   caller strings never reach SQL.

use super::{Store, StoreError, StoreResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::path::Path;
use std::time::{Duration, Instant};

const COLLECTION_TABLES: &[&str] = &["projects", "stories", "tasks"];

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_collections.sql"),
}];

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens a database file and applies all pending migrations.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=store backend=sqlite status=start mode=file");
        let conn = Connection::open(path)?;
        Self::bootstrap(conn, "file", started_at)
    }

    /// Opens an in-memory database and applies all pending migrations.
    pub fn open_in_memory() -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=store backend=sqlite status=start mode=memory");
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn, "memory", started_at)
    }

    fn bootstrap(mut conn: Connection, mode: &str, started_at: Instant) -> StoreResult<Self> {
        match configure(&mut conn) {
            Ok(()) => {
                info!(
                    "event=store_open module=store backend=sqlite status=ok mode={mode} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=store_open module=store backend=sqlite status=error mode={mode} duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }
}

fn configure(conn: &mut Connection) -> StoreResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)
}

fn apply_migrations(conn: &mut Connection) -> StoreResult<()> {
    let current: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let latest = MIGRATIONS.last().map_or(0, |migration| migration.version);

    if current > latest {
        return Err(StoreError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }
    if current == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current {
            continue;
        }
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;
    Ok(())
}

fn table_for(collection: &str) -> StoreResult<&'static str> {
    COLLECTION_TABLES
        .iter()
        .find(|table| **table == collection)
        .copied()
        .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()))
}

impl Store for SqliteStore {
    fn list(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let table = table_for(collection)?;
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT doc FROM {table} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut docs = Vec::new();
        while let Some(row) = rows.next()? {
            let raw: String = row.get(0)?;
            let doc = serde_json::from_str(&raw).map_err(|err| StoreError::Deserialize {
                entry: collection.to_string(),
                message: err.to_string(),
            })?;
            docs.push(doc);
        }
        Ok(docs)
    }

    fn insert(&self, collection: &str, id: &str, doc: &Value) -> StoreResult<()> {
        let table = table_for(collection)?;
        let raw = serde_json::to_string(doc).map_err(StoreError::Serialize)?;
        self.conn.execute(
            &format!("INSERT INTO {table} (id, doc) VALUES (?1, ?2);"),
            params![id, raw],
        )?;
        Ok(())
    }

    fn replace(&self, collection: &str, id: &str, doc: &Value) -> StoreResult<bool> {
        let table = table_for(collection)?;
        let raw = serde_json::to_string(doc).map_err(StoreError::Serialize)?;
        let changed = self.conn.execute(
            &format!("UPDATE {table} SET doc = ?2 WHERE id = ?1;"),
            params![id, raw],
        )?;
        Ok(changed > 0)
    }

    fn remove(&self, collection: &str, id: &str) -> StoreResult<bool> {
        let table = table_for(collection)?;
        let changed = self
            .conn
            .execute(&format!("DELETE FROM {table} WHERE id = ?1;"), params![id])?;
        Ok(changed > 0)
    }

    fn read_meta(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM meta WHERE key = ?1;",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_meta(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn clear_meta(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM meta WHERE key = ?1;", params![key])?;
        Ok(())
    }
}
