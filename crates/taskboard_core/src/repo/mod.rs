//! Generic repository layer over swappable storage.
//!
//! # Responsibility
//! - Provide the CRUD contract for every entity type.
//! - Keep document serialization and backend details out of calling code.
//!
//! # Invariants
//! - `add` persists records with an assigned id; `update` requires one.
//! - Updating a missing id fails with `NotFound` on every backend; deleting
//!   a missing id succeeds (idempotent).
//! - No cascade: removing a parent leaves its children in place.

pub mod selection;

use crate::model::{ChildEntity, Entity, EntityId};
use crate::store::{Store, StoreError};
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entity persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// `update` was called on a record that has no id yet.
    MissingId,
    /// No record with this id exists in the collection.
    NotFound(EntityId),
    /// A stored document cannot be converted to the entity shape.
    InvalidData(String),
    /// Transport-level backend failure.
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId => write!(f, "record is missing an id"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record: {message}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Generic CRUD repository over one entity collection.
///
/// Holds a borrowed backend handle; construct one per call site instead of
/// keeping process-wide repository state.
pub struct Repository<'s, T: Entity> {
    store: &'s dyn Store,
    _entity: PhantomData<fn() -> T>,
}

impl<'s, T: Entity> Repository<'s, T> {
    pub fn new(store: &'s dyn Store) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Returns every stored record in insertion order.
    pub fn get_all(&self) -> RepoResult<Vec<T>> {
        self.store
            .list(T::COLLECTION)?
            .into_iter()
            .map(decode::<T>)
            .collect()
    }

    /// Persists a record, assigning a fresh id when it has none.
    ///
    /// A caller-provided id is honored (import and test flows). Unset
    /// optional fields are stripped from the stored document. No uniqueness
    /// check is performed beyond the id itself.
    pub fn add(&self, mut record: T) -> RepoResult<T> {
        let id = record.id().unwrap_or_else(Uuid::new_v4);
        record.set_id(id);
        let doc = encode(&record)?;
        self.store.insert(T::COLLECTION, &id.to_string(), &doc)?;
        debug!(
            "event=repo_add module=repo collection={} id={id}",
            T::COLLECTION
        );
        Ok(record)
    }

    /// Replaces the full stored record carrying the same id.
    pub fn update(&self, record: &T) -> RepoResult<()> {
        let id = record.id().ok_or(RepoError::MissingId)?;
        let doc = encode(record)?;
        if !self.store.replace(T::COLLECTION, &id.to_string(), &doc)? {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    /// Removes the record with this id. Removing an absent id is a no-op.
    pub fn delete(&self, id: EntityId) -> RepoResult<()> {
        let removed = self.store.remove(T::COLLECTION, &id.to_string())?;
        if !removed {
            debug!(
                "event=repo_delete module=repo collection={} id={id} status=absent",
                T::COLLECTION
            );
        }
        Ok(())
    }
}

impl<'s, T: ChildEntity> Repository<'s, T> {
    /// Returns the records whose parent field equals `parent_id`.
    ///
    /// An unknown parent yields an empty vec, not an error.
    pub fn get_by_parent(&self, parent_id: EntityId) -> RepoResult<Vec<T>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|record| record.parent_id() == parent_id)
            .collect())
    }
}

fn encode<T: Serialize>(record: &T) -> RepoResult<Value> {
    serde_json::to_value(record).map_err(|err| RepoError::InvalidData(err.to_string()))
}

fn decode<T: Entity>(doc: Value) -> RepoResult<T> {
    serde_json::from_value(doc).map_err(|err| {
        RepoError::InvalidData(format!("invalid document in `{}`: {err}", T::COLLECTION))
    })
}
