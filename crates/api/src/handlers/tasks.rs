//! Handlers for the `/tasks` resource.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use taskdesk_core::error::CoreError;
use taskdesk_db::models::task::{CreateTask, Task, UpdateTask};
use taskdesk_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult, ResultExt};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::handlers::path_id;
use crate::query::TaskListParams;
use crate::response::ApiResponse;
use crate::state::AppState;

const INVALID_TASK_ID: &str = "Invalid task ID";

/// GET /api/v1/tasks
///
/// Paginated task list, optionally filtered with `?userId=`.
pub async fn list_tasks(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<TaskListParams>,
) -> AppResult<ApiResponse<Vec<Task>>> {
    let request = params.page_request()?;

    let tasks = TaskRepo::list(&state.store, request, params.user_id)
        .await
        .or_internal("Failed to retrieve tasks")?;

    Ok(ApiResponse::paginated(tasks).with_message("Tasks retrieved successfully"))
}

/// POST /api/v1/tasks
pub async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> AppResult<ApiResponse<Task>> {
    let task = TaskRepo::create(&state.store, &input)
        .await
        .or_internal("Failed to create task")?;

    tracing::info!(task_id = task.id, user_id = task.user_id, "Task created");

    Ok(ApiResponse::created(task).with_message("Task created successfully"))
}

/// GET /api/v1/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<ApiResponse<Task>> {
    let id = path_id(path, INVALID_TASK_ID)?;

    let task = TaskRepo::find_by_id(&state.store, id)
        .await
        .or_internal("Failed to retrieve task")?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    Ok(ApiResponse::success(Some(task)).with_message("Task retrieved successfully"))
}

/// PUT/PATCH /api/v1/tasks/{id}
///
/// Partial update of title, description and status.
pub async fn update_task(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> AppResult<ApiResponse<Task>> {
    let id = path_id(path, INVALID_TASK_ID)?;

    let task = TaskRepo::update(&state.store, id, &input)
        .await
        .or_internal("Failed to update task")?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    tracing::info!(task_id = task.id, status = %task.status, "Task updated");

    Ok(ApiResponse::success(Some(task)).with_message("Task updated successfully"))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<ApiResponse> {
    let id = path_id(path, INVALID_TASK_ID)?;

    let deleted = TaskRepo::delete(&state.store, id)
        .await
        .or_internal("Failed to delete task")?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Task", id }));
    }

    tracing::info!(task_id = id, "Task deleted");

    Ok(ApiResponse::success(None).with_message("Task deleted successfully"))
}
