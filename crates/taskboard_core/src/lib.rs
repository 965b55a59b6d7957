//! Core domain logic for the taskboard project tracker.
//! This crate is the single source of truth for business invariants.

pub mod auth;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use auth::{
    AuthError, AuthResult, AuthService, TokenConfig, TokenPair, TokenSigner, UserDirectory,
};
pub use logging::{default_log_level, init_logging};
pub use model::project::Project;
pub use model::story::Story;
pub use model::task::Task;
pub use model::user::{User, UserRole};
pub use model::{ChildEntity, Entity, EntityId, Priority, WorkState};
pub use repo::selection::ActiveProjectTracker;
pub use repo::{RepoError, RepoResult, Repository};
pub use store::{
    open_store, LocalStore, SqliteStore, Store, StoreBackend, StoreConfig, StoreError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
