//! JWT signing and verification.
//!
//! # Responsibility
//! - Issue short-lived access and long-lived refresh tokens.
//! - Verify signatures and expiry without touching user data.
//!
//! # Invariants
//! - Access and refresh tokens are signed with independent secrets, so one
//!   kind is never accepted where the other is expected.
//! - Claims carry only the user id and role; never credentials.

use crate::model::user::UserRole;
use crate::model::EntityId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_ACCESS_TTL_SECS: u64 = 15 * 60;
pub const DEFAULT_REFRESH_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Token signing configuration (`[auth]` config section).
///
/// The default secrets are insecure development literals; deployments must
/// override both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl_secs: u64,
    pub refresh_ttl_secs: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            access_secret: "taskboard-dev-access-secret".to_string(),
            refresh_secret: "taskboard-dev-refresh-secret".to_string(),
            access_ttl_secs: DEFAULT_ACCESS_TTL_SECS,
            refresh_ttl_secs: DEFAULT_REFRESH_TTL_SECS,
        }
    }
}

/// Claims embedded in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the user id.
    pub sub: EntityId,
    pub role: UserRole,
    pub iat: u64,
    pub exp: u64,
}

/// Claims embedded in refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: EntityId,
    pub iat: u64,
    pub exp: u64,
}

/// Stateless signer/verifier for both token kinds (HS256).
pub struct TokenSigner {
    config: TokenConfig,
}

impl TokenSigner {
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    pub fn issue_access(
        &self,
        user_id: EntityId,
        role: UserRole,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();
        let claims = AccessClaims {
            sub: user_id,
            role,
            iat: now,
            exp: now + self.config.access_ttl_secs,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.access_secret.as_bytes()),
        )
    }

    pub fn issue_refresh(&self, user_id: EntityId) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();
        let claims = RefreshClaims {
            sub: user_id,
            iat: now,
            exp: now + self.config.refresh_ttl_secs,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.refresh_secret.as_bytes()),
        )
    }

    /// Verifies signature and expiry of an access token.
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, jsonwebtoken::errors::Error> {
        decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.config.access_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }

    /// Verifies signature and expiry of a refresh token.
    pub fn verify_refresh(
        &self,
        token: &str,
    ) -> Result<RefreshClaims, jsonwebtoken::errors::Error> {
        decode::<RefreshClaims>(
            token,
            &DecodingKey::from_secret(self.config.refresh_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0)
}
