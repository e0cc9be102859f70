//! User storage.
//!
//! `UserRepository` is the seam between the service layer and wherever users
//! live. The only implementation keeps them in memory for the lifetime of the
//! process.

use async_trait::async_trait;
use gox_common::User;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Port for user persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Append a user. Fails if the id is already taken.
    async fn create(&self, user: User) -> Result<()>;

    /// Look a user up by id. `Ok(None)` means no such user.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// All users in insertion order.
    async fn get_all(&self) -> Result<Vec<User>>;
}

/// In-memory user store guarded by a single lock.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with `users`, kept in the given order.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.id == user.id) {
            return Err(Error::DuplicateUser(user.id));
        }
        tracing::debug!("Stored user {} ({})", user.id, user.full_name());
        users.push(user);
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}
