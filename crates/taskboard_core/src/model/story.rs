//! Story record: a feature-level work item grouped under a project.

use crate::model::{ChildEntity, Entity, EntityId, Priority, WorkState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    /// Owning project. Not validated against the projects collection.
    pub project_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub state: WorkState,
    /// User who created the story.
    pub owner_id: EntityId,
}

impl Story {
    /// Creates an unpersisted story draft in `todo` state, stamped now.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        project_id: EntityId,
        owner_id: EntityId,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            priority,
            project_id,
            created_at: Utc::now(),
            state: WorkState::Todo,
            owner_id,
        }
    }
}

impl Entity for Story {
    const COLLECTION: &'static str = "stories";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl ChildEntity for Story {
    fn parent_id(&self) -> EntityId {
        self.project_id
    }
}
