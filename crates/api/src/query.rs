//! Shared query parameter types for API handlers.
//!
//! Field rules run in [`ValidatedQuery`](crate::extract::ValidatedQuery);
//! out-of-range values come back as a `400` with an `errors` map. Blank
//! values (`?userId=`) count as absent.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};
use taskdesk_core::error::CoreError;
use taskdesk_core::pagination::PageRequest;
use taskdesk_core::types::DbId;
use validator::Validate;

/// Page-based pagination parameters (`?page=&limit=`).
///
/// Missing values default to page 1 and 10 items per page.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1, message = "The page must be at least 1."))]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1, max = 100, message = "The limit must be between 1 and 100."))]
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn page_request(&self) -> Result<PageRequest, CoreError> {
        PageRequest::from_optional(self.page, self.limit)
    }
}

/// Query parameters for `GET /tasks`.
///
/// Declared flat rather than embedding [`PaginationParams`] with
/// `#[serde(flatten)]`, which loses numeric types in query strings.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TaskListParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1, message = "The page must be at least 1."))]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1, max = 100, message = "The limit must be between 1 and 100."))]
    pub limit: Option<i64>,
    /// Only list tasks owned by this user.
    #[serde(rename = "userId", default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1, message = "The userId must be a positive integer."))]
    pub user_id: Option<DbId>,
}

impl TaskListParams {
    pub fn page_request(&self) -> Result<PageRequest, CoreError> {
        PageRequest::from_optional(self.page, self.limit)
    }
}

/// Parse an optional query value, treating a blank one as missing.
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
