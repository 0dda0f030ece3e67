//! Responses for requests no route handles.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::{server_error_response, METHOD_NOT_ALLOWED, REQUEST_TIMEOUT};
use crate::response::ApiResponse;

/// Any path that matches no route.
pub async fn route_not_found() -> ApiResponse {
    ApiResponse::not_found().with_message("Route not found")
}

/// A known path requested with a method it does not support.
pub async fn method_not_allowed() -> ApiResponse {
    ApiResponse::error("Method not allowed", METHOD_NOT_ALLOWED, None)
}

/// Give the timeout layer's bare `408` an error envelope.
///
/// Handlers never answer `408` themselves, so any such response here came
/// from the timeout.
pub async fn timeout_envelope(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("Request timed out");
    ApiResponse::<()>::error("Request timed out", REQUEST_TIMEOUT, None).into_response()
}

/// Turn a handler panic into a generic `500` envelope.
///
/// The panic payload is logged and never sent to the client.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");

    server_error_response()
}
