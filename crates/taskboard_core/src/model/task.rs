//! Task record: the smallest unit of work, grouped under a story.
//!
//! # Invariants
//! - `estimated_time` is expressed in hours and expected to be non-negative.
//! - `start_date`/`end_date`/`assignee_id` stay unset until the matching
//!   lifecycle helper runs; unset fields are stripped from stored documents.

use crate::model::{ChildEntity, Entity, EntityId, Priority, WorkState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    /// Owning story. Not validated against the stories collection.
    pub story_id: EntityId,
    /// Estimated effort in hours.
    pub estimated_time: f64,
    pub state: WorkState,
    pub created_at: DateTime<Utc>,
    /// Set when work starts (first assignment).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Set when the task is completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<EntityId>,
}

impl Task {
    /// Creates an unpersisted task draft in `todo` state, stamped now.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        story_id: EntityId,
        estimated_time: f64,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            priority,
            story_id,
            estimated_time,
            state: WorkState::Todo,
            created_at: Utc::now(),
            start_date: None,
            end_date: None,
            assignee_id: None,
        }
    }

    /// Assigns the task and moves it to `doing`, recording the start time.
    pub fn assign(&mut self, assignee_id: EntityId, now: DateTime<Utc>) {
        self.assignee_id = Some(assignee_id);
        self.state = WorkState::Doing;
        self.start_date = Some(now);
    }

    /// Marks the task `done`, recording the end time.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.state = WorkState::Done;
        self.end_date = Some(now);
    }
}

impl Entity for Task {
    const COLLECTION: &'static str = "tasks";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl ChildEntity for Task {
    fn parent_id(&self) -> EntityId {
        self.story_id
    }
}
