//! JSON-file storage backend.
//!
//! One file per entity collection holding a serialized array of documents,
//! plus one plain-text file per meta key. Every call re-reads from disk and
//! rewrites the whole collection; there is no in-memory cache, so concurrent
//! writers race last-writer-wins.

use super::{Store, StoreError, StoreResult};
use log::info;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        info!(
            "event=store_open module=store backend=local status=ok dir={}",
            dir.display()
        );
        Ok(Self { dir })
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }

    fn meta_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn load(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let raw = match fs::read_to_string(self.collection_path(collection)) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&raw).map_err(|err| StoreError::Deserialize {
            entry: collection.to_string(),
            message: err.to_string(),
        })
    }

    fn save(&self, collection: &str, docs: &[Value]) -> StoreResult<()> {
        let raw = serde_json::to_string(docs).map_err(StoreError::Serialize)?;
        fs::write(self.collection_path(collection), raw)?;
        Ok(())
    }
}

impl Store for LocalStore {
    fn list(&self, collection: &str) -> StoreResult<Vec<Value>> {
        self.load(collection)
    }

    fn insert(&self, collection: &str, _id: &str, doc: &Value) -> StoreResult<()> {
        let mut docs = self.load(collection)?;
        docs.push(doc.clone());
        self.save(collection, &docs)
    }

    fn replace(&self, collection: &str, id: &str, doc: &Value) -> StoreResult<bool> {
        let mut docs = self.load(collection)?;
        let mut found = false;
        for slot in docs.iter_mut() {
            if document_id(slot) == Some(id) {
                *slot = doc.clone();
                found = true;
            }
        }
        if found {
            self.save(collection, &docs)?;
        }
        Ok(found)
    }

    fn remove(&self, collection: &str, id: &str) -> StoreResult<bool> {
        let mut docs = self.load(collection)?;
        let before = docs.len();
        docs.retain(|doc| document_id(doc) != Some(id));
        if docs.len() == before {
            return Ok(false);
        }
        self.save(collection, &docs)?;
        Ok(true)
    }

    fn read_meta(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.meta_path(key)) {
            Ok(raw) => Ok(Some(raw.trim().to_string())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_meta(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::write(self.meta_path(key), value)?;
        Ok(())
    }

    fn clear_meta(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.meta_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn document_id(doc: &Value) -> Option<&str> {
    doc.get("id").and_then(Value::as_str)
}
