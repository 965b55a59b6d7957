//! Active-project selection tracker.
//!
//! Holds exactly one selected-project id in store meta state, independent of
//! the projects collection. There is no history and no cross-process
//! coordination; concurrent writers race last-writer-wins.

use crate::model::EntityId;
use crate::store::{Store, StoreError, StoreResult, ACTIVE_PROJECT_KEY};
use uuid::Uuid;

pub struct ActiveProjectTracker<'s> {
    store: &'s dyn Store,
}

impl<'s> ActiveProjectTracker<'s> {
    pub fn new(store: &'s dyn Store) -> Self {
        Self { store }
    }

    /// Overwrites the stored selection unconditionally.
    pub fn set_active_project(&self, id: EntityId) -> StoreResult<()> {
        self.store.write_meta(ACTIVE_PROJECT_KEY, &id.to_string())
    }

    /// Returns the last stored selection, or `None` when never written.
    pub fn get_active_project(&self) -> StoreResult<Option<EntityId>> {
        match self.store.read_meta(ACTIVE_PROJECT_KEY)? {
            Some(raw) => Uuid::parse_str(&raw)
                .map(Some)
                .map_err(|_| StoreError::Deserialize {
                    entry: ACTIVE_PROJECT_KEY.to_string(),
                    message: format!("invalid project id `{raw}`"),
                }),
            None => Ok(None),
        }
    }

    /// Clears the selection. Clearing an unset selection is a no-op.
    pub fn clear_active_project(&self) -> StoreResult<()> {
        self.store.clear_meta(ACTIVE_PROJECT_KEY)
    }
}
