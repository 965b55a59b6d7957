//! Login, refresh and profile handlers.

use crate::rest::guard::AuthUser;
use crate::rest::AppContext;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use taskboard_core::{AuthError, TokenPair, User};

type ErrorResponse = (StatusCode, Json<Value>);

#[derive(Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

pub async fn login(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenPair>, ErrorResponse> {
    ctx.auth
        .login(&body.login, &body.password)
        .map(Json)
        .map_err(error_response)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

pub async fn refresh(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<RefreshRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    ctx.auth
        .refresh(&body.refresh_token)
        .map(|token| Json(json!({ "token": token })))
        .map_err(error_response)
}

pub async fn me(
    State(ctx): State<Arc<AppContext>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<User>, ErrorResponse> {
    ctx.auth
        .profile(claims.sub)
        .map(Json)
        .ok_or_else(|| error_response(AuthError::UserNotFound))
}

fn error_response(err: AuthError) -> ErrorResponse {
    let status = match err {
        AuthError::UserNotFound => StatusCode::NOT_FOUND,
        AuthError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::UNAUTHORIZED,
    };
    (status, Json(json!({ "error": err.to_string() })))
}
