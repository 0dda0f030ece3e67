//! Domain failure kinds raised by the store and domain rules.
//!
//! The HTTP layer maps every variant onto exactly one response-formatter
//! operation, so adding a variant here means adding a mapping there.

use crate::http_status::HttpStatus;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input was well-formed but breaks a domain rule.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The write would violate a uniqueness rule.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Anything unanticipated. The detail is for logs only.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Status class this failure is reported with.
    pub fn status(&self) -> HttpStatus {
        match self {
            CoreError::NotFound { .. } => HttpStatus::NOT_FOUND,
            CoreError::Validation(_) => HttpStatus::BAD_REQUEST,
            CoreError::Conflict(_) => HttpStatus::CONFLICT,
            CoreError::Unauthorized(_) => HttpStatus::UNAUTHORIZED,
            CoreError::Forbidden(_) => HttpStatus::FORBIDDEN,
            CoreError::Internal(_) => HttpStatus::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to show to API clients.
    ///
    /// Not-found failures name only the entity (`"Task not found"`); internal
    /// failures never expose their detail.
    pub fn public_message(&self) -> String {
        match self {
            CoreError::NotFound { entity, .. } => format!("{entity} not found"),
            CoreError::Validation(msg)
            | CoreError::Conflict(msg)
            | CoreError::Unauthorized(msg)
            | CoreError::Forbidden(msg) => msg.clone(),
            CoreError::Internal(_) => "Internal server error".to_string(),
        }
    }
}
