//! User roster and credential checks.
//!
//! # Responsibility
//! - Hold login credentials next to profile data, away from client paths.
//! - Resolve accounts by login (case-sensitive) and by id.
//!
//! # Invariants
//! - Credentials leave this module only through `verify`.
//! - Profiles returned to callers carry no login or password.

use crate::model::user::{User, UserRole};
use crate::model::EntityId;
use uuid::Uuid;

/// Roster entry: profile data plus login credentials.
///
/// Passwords are plain text because the default roster is a development
/// mock; a production directory would hold password hashes instead.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: EntityId,
    pub login: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl Account {
    /// Client-visible profile with credentials stripped.
    pub fn profile(&self) -> User {
        User {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role,
        }
    }
}

/// Dependency-injected user directory.
///
/// Constructed explicitly and passed to the auth service, so tests can run
/// against their own rosters.
pub struct UserDirectory {
    accounts: Vec<Account>,
}

impl UserDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Seeds the fixed development roster.
    pub fn with_mock_roster() -> Self {
        Self::new(vec![
            account("admin", "admin", "Jan", "Kowalski", UserRole::Admin),
            account("dev", "dev", "Anna", "Nowak", UserRole::Developer),
            account("ops", "ops", "Piotr", "Zielinski", UserRole::Devops),
        ])
    }

    /// Exact, case-sensitive login lookup.
    pub fn find_by_login(&self, login: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.login == login)
    }

    pub fn find_by_id(&self, id: EntityId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Plain-equality credential check.
    ///
    /// Returns `None` on any mismatch without distinguishing unknown logins
    /// from wrong passwords.
    pub fn verify(&self, login: &str, password: &str) -> Option<&Account> {
        self.find_by_login(login)
            .filter(|account| account.password == password)
    }

    /// All client-visible profiles, for assignee/owner pickers.
    pub fn profiles(&self) -> Vec<User> {
        self.accounts.iter().map(Account::profile).collect()
    }
}

fn account(login: &str, password: &str, first_name: &str, last_name: &str, role: UserRole) -> Account {
    Account {
        id: Uuid::new_v4(),
        login: login.to_string(),
        password: password.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        role,
    }
}
