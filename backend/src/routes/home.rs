//! Landing page.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use crate::render;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(home))
}

/// GET / - Static welcome message.
async fn home(State(state): State<Arc<AppState>>) -> Response {
    render::welcome(state.config.response.format)
}
