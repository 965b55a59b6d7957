//! Bearer-token request guard.
//!
//! Rejects requests without a valid, unexpired access token before the
//! handler runs.

use crate::rest::AppContext;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use taskboard_core::auth::AccessClaims;

/// Extractor carrying the verified access-token claims.
pub struct AuthUser(pub AccessClaims);

impl FromRequestParts<Arc<AppContext>> for AuthUser {
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &Arc<AppContext>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| unauthorized("missing bearer token"))?;
        let claims = ctx
            .auth
            .verify_access(token)
            .map_err(|err| unauthorized(&err.to_string()))?;
        Ok(Self(claims))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message })))
}
