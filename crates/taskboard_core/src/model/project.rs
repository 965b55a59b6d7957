//! Project record: the root of the work-item hierarchy.

use crate::model::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Root work-item container. Projects have no parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Assigned on first persistence; `None` for not-yet-stored drafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    pub description: String,
}

impl Project {
    /// Creates an unpersisted project draft.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Entity for Project {
    const COLLECTION: &'static str = "projects";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
