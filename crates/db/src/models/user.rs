//! User entity and request DTOs.

use serde::{Deserialize, Serialize};
use taskdesk_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the users table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUser {
    #[serde(default, deserialize_with = "super::trimmed")]
    #[validate(length(
        min = 3,
        max = 50,
        message = "The username must be between 3 and 50 characters."
    ))]
    pub username: String,

    #[serde(default, deserialize_with = "super::trimmed")]
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: String,
}
