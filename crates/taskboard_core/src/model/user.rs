//! Client-visible user profile.
//!
//! Login credentials never appear here; they live in the authentication
//! roster and stay on the server side.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Devops,
    Developer,
}

/// Profile shape returned to clients and referenced by stories/tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}
