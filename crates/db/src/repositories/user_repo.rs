//! Repository for the users table.

use chrono::Utc;
use taskdesk_core::error::CoreError;
use taskdesk_core::pagination::{Page, PageRequest};
use taskdesk_core::types::DbId;

use crate::models::user::{CreateUser, User};
use crate::Store;

/// Provides create/read operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Usernames are unique as given; emails are unique ignoring ASCII case.
    pub async fn create(store: &Store, input: &CreateUser) -> Result<User, CoreError> {
        let username = input.username.trim();
        let email = input.email.trim();

        let mut tables = store.tables().write().await;

        if tables.users.values().any(|u| u.username == username) {
            return Err(CoreError::Conflict(
                "The username has already been taken.".to_string(),
            ));
        }
        if tables
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(email))
        {
            return Err(CoreError::Conflict(
                "The email has already been taken.".to_string(),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: tables.user_seq.next_id(),
            username: username.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());

        tracing::debug!(user_id = user.id, "User row inserted");

        Ok(user)
    }

    /// Find a user by its ID.
    pub async fn find_by_id(store: &Store, id: DbId) -> Result<Option<User>, CoreError> {
        let tables = store.tables().read().await;
        Ok(tables.users.get(&id).cloned())
    }

    /// List users in id order.
    pub async fn list(store: &Store, request: PageRequest) -> Result<Page<User>, CoreError> {
        let tables = store.tables().read().await;
        let users: Vec<User> = tables.users.values().cloned().collect();
        Ok(Page::from_sorted(users, request))
    }
}
