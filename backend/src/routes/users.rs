//! User directory endpoints.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, MethodRouter};
use axum::{Json, Router};
use gox_common::CreateUserRequest;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::render::render;
use crate::AppState;

/// Build the users router.
///
/// `POST /users` is only mounted when `users.allow_create` is set.
pub fn router(allow_create: bool) -> Router<Arc<AppState>> {
    let users: MethodRouter<Arc<AppState>> = if allow_create {
        get(list_users).post(create_user)
    } else {
        get(list_users)
    };

    Router::new()
        .route("/users", users)
        .route("/user", get(get_user_by_id))
}

#[derive(Debug, Deserialize)]
struct UserQuery {
    id: Option<String>,
}

/// Parse a user id from its textual form.
pub fn parse_user_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|e| Error::InvalidId {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// GET /users - All users in insertion order.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Response> {
    let users = state.users.get_all_users().await?;
    render(state.config.response.format, StatusCode::OK, &users)
}

/// GET /user?id=<uuid> - A single user.
async fn get_user_by_id(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<UserQuery>, QueryRejection>,
) -> Result<Response> {
    let Query(query) = query.map_err(|e| Error::InvalidRequest(e.body_text()))?;
    let raw = query
        .id
        .ok_or_else(|| Error::InvalidRequest("missing query parameter: id".to_string()))?;
    let id = parse_user_id(&raw)?;

    tracing::debug!("Looking up user {}", id);

    let user = state
        .users
        .get_user_by_id(id)
        .await?
        .ok_or(Error::UserNotFound(id))?;

    render(state.config.response.format, StatusCode::OK, &user)
}

/// POST /users - Mint and store a new user.
async fn create_user(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = body.map_err(|e| Error::InvalidRequest(e.body_text()))?;
    let user = state.users.register_user(request).await?;
    render(state.config.response.format, StatusCode::CREATED, &user)
}
