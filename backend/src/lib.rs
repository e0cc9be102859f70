//! gox - a small user directory served over HTTP.
//!
//! Requests flow handler -> [`UserService`] -> [`UserRepository`]; the
//! repository is owned by [`AppState`] and injected into every handler.

pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod service;

pub use crate::config::{Config, ResponseFormat};
pub use crate::error::{Error, Result};
pub use crate::repository::{InMemoryUserRepository, UserRepository};
pub use crate::service::UserService;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub users: UserService,
}

impl AppState {
    /// Build state around the given repository.
    pub fn new(config: Config, repository: Arc<dyn UserRepository>) -> Self {
        Self {
            config,
            users: UserService::new(repository),
        }
    }

    /// Build state backed by an in-memory store, seeded if `users.seed` is set.
    pub fn in_memory(config: Config) -> Self {
        let repository = if config.users.seed {
            let users = seed::demo_users();
            tracing::info!("Seeding {} demo users", users.len());
            InMemoryUserRepository::with_users(users)
        } else {
            InMemoryUserRepository::new()
        };
        Self::new(config, Arc::new(repository))
    }
}

/// Build the application router with all middleware attached.
pub fn app(state: Arc<AppState>) -> Router {
    routes::router(state.config.users.allow_create)
        .layer(middleware::from_fn(logging::request_logger))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
