//! In-memory `UserStore`
//!
//! Records live in a `Vec` in insertion order next to the id counter. A single
//! `RwLock` guards both, and every read-modify-write runs under one write
//! guard so uniqueness checks cannot race with concurrent writers.

use crate::error::{Result, RosterError};
use crate::storage::UserStore;
use crate::types::{CreateUser, UpdateUser, User, UserId};
use crate::validation::{ensure_email_available, normalize_email, normalize_name, WriteKind};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    // Strictly greater than every id ever issued; `None` once u64 ids run out
    next_id: Option<u64>,
}

impl Inner {
    fn position(&self, id: &UserId) -> Option<usize> {
        self.users.iter().position(|u| &u.id == id)
    }
}

/// Process-local user store
#[derive(Debug)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    /// Empty store; the first user gets id `1`
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Store holding the three demo users, next id `4`
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Store holding `users` as-is.
    ///
    /// The counter starts after the largest numeric id present.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .filter_map(|u| u.id.seq())
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        Self {
            inner: RwLock::new(Inner { users, next_id }),
        }
    }

    /// The id the next created user will receive, `None` when ids are exhausted
    pub async fn next_id(&self) -> Option<UserId> {
        self.inner.read().await.next_id.map(UserId::from_seq)
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| &u.id == id).cloned())
    }

    async fn create_user(&self, user: CreateUser) -> Result<User> {
        let name = normalize_name(&user.name, WriteKind::Create)?;
        let email = normalize_email(&user.email, WriteKind::Create)?;

        let mut inner = self.inner.write().await;
        ensure_email_available(&inner.users, &email, None)?;
        let seq = inner
            .next_id
            .ok_or_else(|| RosterError::storage("user id space exhausted"))?;

        let user = User::new(UserId::from_seq(seq), name, email);
        inner.users.push(user.clone());
        inner.next_id = seq.checked_add(1);

        tracing::debug!(id = %user.id, "user created");
        Ok(user)
    }

    async fn update_user(&self, id: &UserId, patch: UpdateUser) -> Result<User> {
        let mut inner = self.inner.write().await;
        let index = inner
            .position(id)
            .ok_or_else(|| RosterError::not_found("User", id.as_str()))?;

        if patch.is_empty() {
            return Ok(inner.users[index].clone());
        }

        let name = patch
            .name
            .as_deref()
            .map(|raw| normalize_name(raw, WriteKind::Update))
            .transpose()?;
        let email = match patch.email.as_deref() {
            Some(raw) => {
                let email = normalize_email(raw, WriteKind::Update)?;
                ensure_email_available(&inner.users, &email, Some(id))?;
                Some(email)
            }
            None => None,
        };

        let user = &mut inner.users[index];
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }

        tracing::debug!(id = %user.id, "user updated");
        Ok(user.clone())
    }

    async fn delete_user(&self, id: &UserId) -> Result<()> {
        let mut inner = self.inner.write().await;
        let index = inner
            .position(id)
            .ok_or_else(|| RosterError::not_found("User", id.as_str()))?;

        inner.users.remove(index);
        tracing::debug!(%id, "user deleted");
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.inner.read().await.users.len())
    }
}

/// The demo users a fresh server starts with
pub fn seed_users() -> Vec<User> {
    [
        ("1", "Alice Johnson", "alice@example.com", "2024-01-15T10:30:00Z"),
        ("2", "Bob Smith", "bob@example.com", "2024-01-16T14:20:00Z"),
        ("3", "Charlie Brown", "charlie@example.com", "2024-01-17T09:15:00Z"),
    ]
    .into_iter()
    .map(|(id, name, email, created_at)| User {
        id: UserId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        created_at: created_at.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_has_three_users() {
        let store = InMemoryUserStore::seeded();

        let users = store.list_users().await.unwrap();
        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Alice Johnson", "Bob Smith", "Charlie Brown"]);
        assert_eq!(store.next_id().await, Some(UserId::new("4")));
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        let store = InMemoryUserStore::new();
        let user = store
            .create_user(CreateUser::new("Ann", "ann@example.com"))
            .await
            .unwrap();

        assert_eq!(user.id.as_str(), "1");
    }

    #[tokio::test]
    async fn counter_follows_largest_numeric_id() {
        let mut users = seed_users();
        users[1].id = UserId::new("10");
        let store = InMemoryUserStore::with_users(users);

        assert_eq!(store.next_id().await, Some(UserId::new("11")));
    }

    #[tokio::test]
    async fn create_normalizes_fields() {
        let store = InMemoryUserStore::seeded();
        let user = store
            .create_user(CreateUser::new("  Bob  ", "  Robert@Example.com "))
            .await
            .unwrap();

        assert_eq!(user.name, "Bob");
        assert_eq!(user.email, "robert@example.com");
        assert_eq!(store.get_user(&user.id).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn create_rejects_case_insensitive_duplicate() {
        let store = InMemoryUserStore::seeded();
        let err = store
            .create_user(CreateUser::new("Alice Again", "ALICE@example.com"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RosterError::validation("User with this email already exists")
        );
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn failed_create_does_not_consume_id() {
        let store = InMemoryUserStore::seeded();
        store
            .create_user(CreateUser::new(" ", "blank@example.com"))
            .await
            .unwrap_err();

        assert_eq!(store.next_id().await, Some(UserId::new("4")));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryUserStore::seeded();
        let first = store
            .create_user(CreateUser::new("Temp", "temp@example.com"))
            .await
            .unwrap();
        store.delete_user(&first.id).await.unwrap();

        let second = store
            .create_user(CreateUser::new("Temp", "temp@example.com"))
            .await
            .unwrap();
        assert_eq!(first.id.as_str(), "4");
        assert_eq!(second.id.as_str(), "5");
    }

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let store = InMemoryUserStore::seeded();
        let id = UserId::new("2");
        let before = store.get_user(&id).await.unwrap().unwrap();

        let after = store.update_user(&id, UpdateUser::name(" X ")).await.unwrap();

        assert_eq!(after.name, "X");
        assert_eq!(after.email, before.email);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.id, before.id);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = InMemoryUserStore::seeded();
        let err = store
            .update_user(&UserId::new("99"), UpdateUser::name("Ghost"))
            .await
            .unwrap_err();

        assert_eq!(err, RosterError::not_found("User", "99"));
    }

    #[tokio::test]
    async fn update_email_conflict_with_other_user() {
        let store = InMemoryUserStore::seeded();
        let err = store
            .update_user(&UserId::new("1"), UpdateUser::email("Bob@Example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, RosterError::Validation(_)));
    }

    #[tokio::test]
    async fn update_may_keep_own_email() {
        let store = InMemoryUserStore::seeded();
        let user = store
            .update_user(&UserId::new("1"), UpdateUser::email(" ALICE@example.com"))
            .await
            .unwrap();

        assert_eq!(user.email, "alice@example.com");
    }

    #[tokio::test]
    async fn counter_near_u64_max_issues_last_id_then_fails() {
        let mut users = seed_users();
        users[0].id = UserId::from_seq(u64::MAX - 1);
        let store = InMemoryUserStore::with_users(users);

        let last = store
            .create_user(CreateUser::new("Last", "last@example.com"))
            .await
            .unwrap();
        assert_eq!(last.id.seq(), Some(u64::MAX));
        assert_eq!(store.next_id().await, None);

        let err = store
            .create_user(CreateUser::new("Overflow", "overflow@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::Storage(_)));
        assert!(!err.is_client_error());
        assert_eq!(store.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn seed_with_u64_max_id_does_not_overflow() {
        let mut users = seed_users();
        users[2].id = UserId::from_seq(u64::MAX);
        let store = InMemoryUserStore::with_users(users);

        assert_eq!(store.next_id().await, None);
        let err = store
            .create_user(CreateUser::new("Nope", "nope@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, RosterError::storage("user id space exhausted"));
    }

    async fn assert_update_rejected(patch: UpdateUser, message: &str) {
        let store = InMemoryUserStore::seeded();
        let id = UserId::new("1");
        let before = store.get_user(&id).await.unwrap().unwrap();

        let err = store.update_user(&id, patch).await.unwrap_err();

        assert_eq!(err, RosterError::validation(message));
        assert_eq!(store.get_user(&id).await.unwrap(), Some(before));
    }

    #[tokio::test]
    async fn update_rejects_blank_name() {
        assert_update_rejected(UpdateUser::name("   "), "Name cannot be empty").await;
    }

    #[tokio::test]
    async fn update_rejects_blank_email() {
        assert_update_rejected(UpdateUser::email("  "), "Email cannot be empty").await;
    }

    #[tokio::test]
    async fn update_rejects_email_without_at() {
        assert_update_rejected(
            UpdateUser::email("noat"),
            "Email must be a valid email address",
        )
        .await;
    }

    #[tokio::test]
    async fn invalid_update_leaves_record_untouched() {
        let store = InMemoryUserStore::seeded();
        let id = UserId::new("3");
        let patch = UpdateUser {
            name: Some("Chuck".to_string()),
            email: Some("no-at-sign".to_string()),
        };

        let err = store.update_user(&id, patch).await.unwrap_err();
        assert_eq!(err, RosterError::validation("Email must be a valid email address"));

        let user = store.get_user(&id).await.unwrap().unwrap();
        assert_eq!(user.name, "Charlie Brown");
    }

    #[tokio::test]
    async fn empty_patch_returns_record_unchanged() {
        let store = InMemoryUserStore::seeded();
        let id = UserId::new("1");
        let before = store.get_user(&id).await.unwrap().unwrap();

        let after = store.update_user(&id, UpdateUser::default()).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let store = InMemoryUserStore::seeded();
        let id = UserId::new("2");

        store.delete_user(&id).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 2);
        assert_eq!(store.get_user(&id).await.unwrap(), None);
        assert!(matches!(
            store.delete_user(&id).await,
            Err(RosterError::NotFound { .. })
        ));
    }
}
