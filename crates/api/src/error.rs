use axum::response::{IntoResponse, Response};
use taskdesk_core::error::CoreError;
use taskdesk_core::http_status::HttpStatus;
use validator::ValidationErrors;

use crate::response::{ApiResponse, FieldErrors};

/// `405` is not in the status catalog; handlers that refuse a method use this.
pub const METHOD_NOT_ALLOWED: HttpStatus = HttpStatus::new(405);

/// `408`, sent when a request outlives the configured timeout.
pub const REQUEST_TIMEOUT: HttpStatus = HttpStatus::new(408);

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] by choosing exactly one formatter operation
/// per variant, so every failure reaches the client as a `success: false`
/// envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `taskdesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Malformed or out-of-range request input with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Declarative field rules failed.
    #[error("Invalid fields: {}", .0.keys().cloned().collect::<Vec<_>>().join(", "))]
    InvalidFields(FieldErrors),

    /// The resource does not support this method.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// An unanticipated failure. `message` is sent to the client, `detail`
    /// is only logged.
    #[error("{message}: {detail}")]
    Internal {
        message: &'static str,
        detail: String,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Replace the client-facing text of an internal failure.
    ///
    /// Client-caused failures (validation, not found, conflict, ...) are
    /// returned unchanged.
    pub fn mask_internal(self, message: &'static str) -> Self {
        match self {
            AppError::Core(CoreError::Internal(detail)) | AppError::Internal { detail, .. } => {
                AppError::Internal { message, detail }
            }
            other => other,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidFields(field_errors(&errors))
    }
}

/// Flatten validator output into `{field: [message, ...]}`.
///
/// Rules without a custom message fall back to `"The <field> field is invalid."`.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, failures)| {
            let field = field.to_string();
            let messages = failures
                .iter()
                .map(|failure| match &failure.message {
                    Some(message) => message.to_string(),
                    None => format!("The {field} field is invalid."),
                })
                .collect();
            (field, messages)
        })
        .collect()
}

/// Attach a generic client-facing message to whatever an internal failure
/// carries.
///
/// ```ignore
/// let tasks = TaskRepo::list(&state.store, request, None)
///     .await
///     .or_internal("Failed to retrieve tasks")?;
/// ```
pub trait ResultExt<T> {
    fn or_internal(self, message: &'static str) -> AppResult<T>;
}

impl<T, E: Into<AppError>> ResultExt<T> for Result<T, E> {
    fn or_internal(self, message: &'static str) -> AppResult<T> {
        self.map_err(|err| err.into().mask_internal(message))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let response: ApiResponse = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match &core {
                CoreError::NotFound { .. } => {
                    ApiResponse::not_found().with_message(core.public_message())
                }
                CoreError::Validation(msg) => ApiResponse::validation_error(None).with_message(msg),
                CoreError::Conflict(msg) => ApiResponse::conflict().with_message(msg),
                CoreError::Unauthorized(msg) => ApiResponse::unauthorized().with_message(msg),
                CoreError::Forbidden(msg) => ApiResponse::forbidden().with_message(msg),
                CoreError::Internal(detail) => {
                    tracing::error!(error = %detail, "Internal core error");
                    ApiResponse::server_error()
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => ApiResponse::validation_error(None).with_message(msg),
            AppError::InvalidFields(errors) => ApiResponse::validation_error(Some(errors)),
            AppError::MethodNotAllowed(msg) => ApiResponse::error(msg, METHOD_NOT_ALLOWED, None),
            AppError::Internal { message, detail } => {
                tracing::error!(error = %detail, client_message = message, "Internal error");
                ApiResponse::server_error().with_message(message)
            }
        };

        let status = response.status();
        if status.is_client_error() {
            tracing::debug!(
                status = status.code(),
                reason = status.reason_phrase(),
                "Request rejected"
            );
        }

        response.into_response()
    }
}

/// Generic body for failures that escape every handler (panics, etc.).
pub fn server_error_response() -> Response {
    ApiResponse::<()>::server_error().into_response()
}
