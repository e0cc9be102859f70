//! User service: mints new users and forwards storage calls.

use std::sync::Arc;

use chrono::Utc;
use gox_common::{CreateUserRequest, User};
use uuid::Uuid;

use crate::error::Result;
use crate::repository::UserRepository;

/// Orchestration layer between the HTTP handlers and the repository.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Build a new user with a fresh random id and matching timestamps.
    ///
    /// The user is not stored; pass it to [`UserService::create_user`] for that.
    pub fn new_user(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> User {
        User::new(Uuid::new_v4(), first_name, last_name, email, Utc::now())
    }

    pub async fn create_user(&self, user: User) -> Result<()> {
        self.repository.create(user).await
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        self.repository.get_by_id(id).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        self.repository.get_all().await
    }

    /// Mint a user from a create request and store it.
    pub async fn register_user(&self, request: CreateUserRequest) -> Result<User> {
        let user = Self::new_user(request.first_name, request.last_name, request.email);
        self.create_user(user.clone()).await?;
        tracing::info!("Registered user {} ({})", user.id, user.full_name());
        Ok(user)
    }
}
