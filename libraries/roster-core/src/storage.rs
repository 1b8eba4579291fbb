//! Storage trait for user records

use crate::error::Result;
use crate::types::{CreateUser, UpdateUser, User, UserId};
use async_trait::async_trait;

/// Record store backing the resolver table
///
/// Implementations own their records and id counter; every write is
/// validated and normalized with the rules in [`crate::validation`].
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users in insertion order
    async fn list_users(&self) -> Result<Vec<User>>;

    /// User by ID, `None` when absent
    async fn get_user(&self, id: &UserId) -> Result<Option<User>>;

    /// Validate, normalize and append a new user
    async fn create_user(&self, user: CreateUser) -> Result<User>;

    /// Apply a partial update; fails with `NotFound` for an unknown ID
    async fn update_user(&self, id: &UserId, patch: UpdateUser) -> Result<User>;

    /// Remove a user; fails with `NotFound` for an unknown ID
    async fn delete_user(&self, id: &UserId) -> Result<()>;

    /// Number of stored users
    async fn count(&self) -> Result<usize> {
        Ok(self.list_users().await?.len())
    }
}
