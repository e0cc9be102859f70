//! HTTP routes.

pub mod health;
pub mod home;
pub mod users;

use std::sync::Arc;

use axum::http::Uri;
use axum::Router;

use crate::error::Error;
use crate::AppState;

/// Build the full route table.
pub fn router(allow_create: bool) -> Router<Arc<AppState>> {
    Router::new()
        .merge(home::router())
        .merge(users::router(allow_create))
        .merge(health::router())
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> Error {
    Error::RouteNotFound(uri.path().to_string())
}
