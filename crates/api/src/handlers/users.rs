//! Handlers for the `/users` resource.
//!
//! Users can be created and read. Updates and deletes are refused with `405`.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use taskdesk_core::error::CoreError;
use taskdesk_db::models::user::{CreateUser, User};
use taskdesk_db::repositories::UserRepo;

use crate::error::{AppError, AppResult, ResultExt};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::handlers::path_id;
use crate::query::PaginationParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> AppResult<ApiResponse<Vec<User>>> {
    let request = params.page_request()?;

    let users = UserRepo::list(&state.store, request)
        .await
        .or_internal("Failed to retrieve users")?;

    Ok(ApiResponse::paginated(users).with_message("Users retrieved successfully"))
}

/// POST /api/v1/users
///
/// Duplicate usernames or emails are rejected with `409`.
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> AppResult<ApiResponse<User>> {
    let user = UserRepo::create(&state.store, &input)
        .await
        .or_internal("Failed to create user")?;

    tracing::info!(user_id = user.id, username = %user.username, "User created");

    Ok(ApiResponse::created(user).with_message("User created successfully"))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<ApiResponse<User>> {
    let id = path_id(path, "Invalid user ID")?;

    let user = UserRepo::find_by_id(&state.store, id)
        .await
        .or_internal("Failed to retrieve user")?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(ApiResponse::success(Some(user)).with_message("User retrieved successfully"))
}

/// PUT/PATCH/DELETE /api/v1/users/{id}
pub async fn reject_user_mutation() -> AppError {
    AppError::MethodNotAllowed("Method not allowed".to_string())
}
