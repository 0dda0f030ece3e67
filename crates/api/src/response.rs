//! Shared response envelope for every API endpoint.
//!
//! Handlers never build JSON bodies by hand. Every success and every failure
//! goes through [`ApiResponse`], so clients parse exactly one success shape
//! and one error shape:
//!
//! ```text
//! success:    {"success": true,  "message": "...", "data"?: ...}
//! paginated:  {"success": true,  "message": "...", "data": [...], "pagination": {...}}
//! error:      {"success": false, "message": "...", "error": "...", "errors"?: {field: [...]}}
//! no content: empty body, 204
//! ```
//!
//! Constructors apply the default message and status for each case;
//! [`ApiResponse::with_message`] and [`ApiResponse::with_status`] override
//! them. Building a response never fails and never reads the clock, so the
//! same inputs always serialize to the same bytes.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use taskdesk_core::http_status::HttpStatus;
use taskdesk_core::pagination::PaginatedResult;

// ---------------------------------------------------------------------------
// Default messages
// ---------------------------------------------------------------------------

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success";
pub const DEFAULT_CREATED_MESSAGE: &str = "Resource created successfully";
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "Resource not found";
pub const DEFAULT_VALIDATION_MESSAGE: &str = "Validation failed";
pub const DEFAULT_UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
pub const DEFAULT_FORBIDDEN_MESSAGE: &str = "Forbidden";
pub const DEFAULT_CONFLICT_MESSAGE: &str = "Conflict";
pub const DEFAULT_SERVER_ERROR_MESSAGE: &str = "Internal server error";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Per-field validation messages, keyed by field name.
///
/// Ordered so the serialized `errors` object is deterministic.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// The `pagination` block of a paginated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_more: bool,
}

impl PaginationInfo {
    /// Copy the provider's metadata without recomputing anything.
    pub fn from_result<P: PaginatedResult>(result: &P) -> Self {
        Self {
            page: result.current_page(),
            limit: result.per_page(),
            total: result.total(),
            total_pages: result.last_page(),
            has_more: result.has_more_pages(),
        }
    }
}

/// Top-level JSON object wrapping every response body.
///
/// Absent optional members are omitted from the JSON, never sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationInfo>,
}

// ---------------------------------------------------------------------------
// ApiResponse
// ---------------------------------------------------------------------------

/// A status code plus an optional [`Envelope`].
///
/// `body` is `None` only for [`ApiResponse::no_content`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T = ()> {
    status: HttpStatus,
    body: Option<Envelope<T>>,
}

impl<T> ApiResponse<T> {
    /// `200 {"success": true, "message": "Success", "data"?: ...}`.
    ///
    /// `data` is omitted from the body when `None`.
    pub fn success(data: Option<T>) -> Self {
        Self {
            status: HttpStatus::OK,
            body: Some(Envelope {
                success: true,
                message: DEFAULT_SUCCESS_MESSAGE.to_string(),
                data,
                error: None,
                errors: None,
                pagination: None,
            }),
        }
    }

    /// `201` success carrying the created resource.
    pub fn created(data: T) -> Self {
        Self::success(Some(data))
            .with_message(DEFAULT_CREATED_MESSAGE)
            .with_status(HttpStatus::CREATED)
    }

    /// Failure envelope. `message` is sent as both `message` and `error`;
    /// `errors` appears only when supplied.
    pub fn error(
        message: impl Into<String>,
        status: HttpStatus,
        errors: Option<FieldErrors>,
    ) -> Self {
        let message = message.into();
        Self {
            status,
            body: Some(Envelope {
                success: false,
                error: Some(message.clone()),
                message,
                data: None,
                errors,
                pagination: None,
            }),
        }
    }

    /// `404 Resource not found`.
    pub fn not_found() -> Self {
        Self::error(DEFAULT_NOT_FOUND_MESSAGE, HttpStatus::NOT_FOUND, None)
    }

    /// `400 Validation failed`, optionally with per-field messages.
    pub fn validation_error(errors: Option<FieldErrors>) -> Self {
        Self::error(DEFAULT_VALIDATION_MESSAGE, HttpStatus::BAD_REQUEST, errors)
    }

    /// `401 Unauthorized`.
    pub fn unauthorized() -> Self {
        Self::error(DEFAULT_UNAUTHORIZED_MESSAGE, HttpStatus::UNAUTHORIZED, None)
    }

    /// `403 Forbidden`.
    pub fn forbidden() -> Self {
        Self::error(DEFAULT_FORBIDDEN_MESSAGE, HttpStatus::FORBIDDEN, None)
    }

    /// `409 Conflict`.
    pub fn conflict() -> Self {
        Self::error(DEFAULT_CONFLICT_MESSAGE, HttpStatus::CONFLICT, None)
    }

    /// `500 Internal server error`. Callers pass generic text only.
    pub fn server_error() -> Self {
        Self::error(
            DEFAULT_SERVER_ERROR_MESSAGE,
            HttpStatus::INTERNAL_SERVER_ERROR,
            None,
        )
    }

    /// `204` with an empty body.
    pub fn no_content() -> Self {
        Self {
            status: HttpStatus::NO_CONTENT,
            body: None,
        }
    }

    /// Replace the message. On failures `error` follows `message`.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if let Some(body) = self.body.as_mut() {
            let message = message.into();
            if body.error.is_some() {
                body.error = Some(message.clone());
            }
            body.message = message;
        }
        self
    }

    /// Replace the status code.
    pub fn with_status(mut self, status: HttpStatus) -> Self {
        self.status = status;
        self
    }

    pub fn status(&self) -> HttpStatus {
        self.status
    }

    /// The envelope, or `None` for a no-content response.
    pub fn envelope(&self) -> Option<&Envelope<T>> {
        self.body.as_ref()
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// `200` success whose `data` is the page's items (present even when
    /// empty) plus a `pagination` block copied from `result`.
    pub fn paginated<P>(result: P) -> Self
    where
        P: PaginatedResult<Item = T>,
    {
        let pagination = PaginationInfo::from_result(&result);
        let mut response = Self::success(Some(result.into_items()));
        if let Some(body) = response.body.as_mut() {
            body.pagination = Some(pagination);
        }
        response
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.body {
            Some(envelope) => (status, Json(envelope)).into_response(),
            None => status.into_response(),
        }
    }
}
