pub mod fallback;
pub mod tasks;
pub mod users;

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use taskdesk_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Resolve the `{id}` path segment.
///
/// Segments axum cannot decode (e.g. invalid UTF-8) are refused with the
/// same `message` as ids that do not parse.
pub(crate) fn path_id(
    path: Result<Path<String>, PathRejection>,
    message: &str,
) -> AppResult<DbId> {
    match path {
        Ok(Path(raw)) => parse_id(&raw, message),
        Err(rejection) => {
            tracing::debug!(%rejection, "Undecodable path id");
            Err(AppError::BadRequest(message.to_string()))
        }
    }
}

/// Parse a path id, rejecting anything that is not a positive integer.
///
/// `message` is returned to the client as-is (e.g. `"Invalid task ID"`).
pub(crate) fn parse_id(raw: &str, message: &str) -> AppResult<DbId> {
    raw.trim()
        .parse::<DbId>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| AppError::BadRequest(message.to_string()))
}
