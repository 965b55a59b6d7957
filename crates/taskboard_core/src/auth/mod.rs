//! Authentication gateway: credential checks and token lifecycle.
//!
//! # Responsibility
//! - Validate credentials against the injected roster.
//! - Issue and verify access/refresh token pairs.
//!
//! # Invariants
//! - Login failures are opaque: unknown logins and wrong passwords are
//!   indistinguishable to callers.
//! - Refresh tokens are never rotated or revoked before their fixed expiry.
//! - Logged auth events carry user ids only, never credentials or tokens.

pub mod roster;
pub mod token;

pub use roster::{Account, UserDirectory};
pub use token::{AccessClaims, RefreshClaims, TokenConfig, TokenSigner};

use crate::model::user::User;
use crate::model::EntityId;
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication errors. Credential failures stay opaque.
#[derive(Debug)]
pub enum AuthError {
    /// Unknown login or wrong password; intentionally not distinguished.
    InvalidCredentials,
    /// Refresh token failed verification or references a vanished user.
    InvalidRefreshToken,
    /// Access token is missing, malformed, or expired.
    InvalidAccessToken,
    /// Access token verified but the embedded user no longer exists.
    UserNotFound,
    /// Token could not be signed; an internal fault, not a caller error.
    Signing(jsonwebtoken::errors::Error),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid credentials"),
            Self::InvalidRefreshToken => write!(f, "invalid refresh token"),
            Self::InvalidAccessToken => write!(f, "invalid access token"),
            Self::UserNotFound => write!(f, "user not found"),
            Self::Signing(err) => write!(f, "failed to sign token: {err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Signing(err) => Some(err),
            _ => None,
        }
    }
}

/// Access/refresh token pair returned by `login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub token: String,
    pub refresh_token: String,
}

/// Authentication service over an injected roster and signer.
pub struct AuthService {
    directory: UserDirectory,
    signer: TokenSigner,
}

impl AuthService {
    pub fn new(directory: UserDirectory, signer: TokenSigner) -> Self {
        Self { directory, signer }
    }

    /// Validates credentials and issues a fresh token pair.
    pub fn login(&self, login: &str, password: &str) -> AuthResult<TokenPair> {
        let Some(account) = self.directory.verify(login, password) else {
            warn!("event=login module=auth status=denied");
            return Err(AuthError::InvalidCredentials);
        };

        let token = self
            .signer
            .issue_access(account.id, account.role)
            .map_err(AuthError::Signing)?;
        let refresh_token = self
            .signer
            .issue_refresh(account.id)
            .map_err(AuthError::Signing)?;

        info!(
            "event=login module=auth status=ok user_id={} role={:?}",
            account.id, account.role
        );
        Ok(TokenPair {
            token,
            refresh_token,
        })
    }

    /// Verifies a refresh token and issues a new access token.
    ///
    /// Bad signature, expiry, and a user id that no longer resolves all
    /// collapse into the same opaque error.
    pub fn refresh(&self, refresh_token: &str) -> AuthResult<String> {
        let claims = self
            .signer
            .verify_refresh(refresh_token)
            .map_err(|_| AuthError::InvalidRefreshToken)?;
        let account = self
            .directory
            .find_by_id(claims.sub)
            .ok_or(AuthError::InvalidRefreshToken)?;

        info!(
            "event=token_refresh module=auth status=ok user_id={}",
            account.id
        );
        self.signer
            .issue_access(account.id, account.role)
            .map_err(AuthError::Signing)
    }

    /// Verifies an access token without touching the roster.
    pub fn verify_access(&self, token: &str) -> AuthResult<AccessClaims> {
        self.signer
            .verify_access(token)
            .map_err(|_| AuthError::InvalidAccessToken)
    }

    /// Resolves the profile behind a valid, unexpired access token.
    pub fn me(&self, access_token: &str) -> AuthResult<User> {
        let claims = self.verify_access(access_token)?;
        self.profile(claims.sub).ok_or(AuthError::UserNotFound)
    }

    /// Looks up a client-visible profile by user id.
    pub fn profile(&self, user_id: EntityId) -> Option<User> {
        self.directory.find_by_id(user_id).map(Account::profile)
    }

    /// All client-visible profiles.
    pub fn profiles(&self) -> Vec<User> {
        self.directory.profiles()
    }
}
