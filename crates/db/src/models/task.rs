//! Task entity and request DTOs.

use serde::{Deserialize, Serialize};
use taskdesk_core::task_status::TaskStatus;
use taskdesk_core::types::{DbId, Timestamp};
use validator::{Validate, ValidationError};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the tasks table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Body of `POST /tasks`.
///
/// Missing `title`/`user_id` deserialize to empty values so the field rules
/// report them instead of the JSON parser.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTask {
    #[serde(default, deserialize_with = "super::trimmed")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "The title field is required and may not be greater than 255 characters."
    ))]
    pub title: String,

    #[validate(length(
        max = 1000,
        message = "The description may not be greater than 1000 characters."
    ))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_task_status"))]
    pub status: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, message = "The user_id field is required."))]
    pub user_id: DbId,
}

/// Body of `PUT/PATCH /tasks/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTask {
    #[validate(length(
        min = 1,
        max = 255,
        message = "The title may not be empty or greater than 255 characters."
    ))]
    pub title: Option<String>,

    #[validate(length(
        max = 1000,
        message = "The description may not be greater than 1000 characters."
    ))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_task_status"))]
    pub status: Option<String>,
}

/// Field rule for task status strings.
fn validate_task_status(status: &str) -> Result<(), ValidationError> {
    status.parse::<TaskStatus>().map(|_| ()).map_err(|err| {
        ValidationError::new("task_status").with_message(err.public_message().into())
    })
}
