//! Domain model for the project/story/task hierarchy.
//!
//! # Responsibility
//! - Define the canonical record shapes shared by storage backends and callers.
//! - Keep persisted wire naming stable (camelCase documents) across backends.
//!
//! # Invariants
//! - Every record is identified by a stable `EntityId` once persisted.
//! - Cross-references (`projectId`, `storyId`, `ownerId`) are held as plain
//!   ids; referential integrity is the caller's responsibility.
//! - Workflow state transitions are unconstrained.

pub mod project;
pub mod story;
pub mod task;
pub mod user;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every persisted record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = Uuid;

/// Priority level shared by stories and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Workflow state shared by stories and tasks.
///
/// Any state can be set at any time; no workflow enforcement exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkState {
    Todo,
    Doing,
    Done,
}

/// Persistable record bound to one storage collection.
///
/// `id` is optional in the record shape: `add` accepts records without an
/// id and assigns one; `update` rejects records that still lack one.
pub trait Entity: Serialize + DeserializeOwned {
    /// Backing collection name; also the local-backend file stem.
    const COLLECTION: &'static str;

    fn id(&self) -> Option<EntityId>;
    fn set_id(&mut self, id: EntityId);
}

/// Entity scoped under a parent collection: stories under projects, tasks
/// under stories. Projects have no parent and do not implement this.
pub trait ChildEntity: Entity {
    fn parent_id(&self) -> EntityId;
}
