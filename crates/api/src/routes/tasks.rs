use axum::routing::get;
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Task routes mounted at `/tasks`.
///
/// ```text
/// GET    /        -> list_tasks
/// POST   /        -> create_task
/// GET    /{id}    -> get_task
/// PUT    /{id}    -> update_task
/// PATCH  /{id}    -> update_task
/// DELETE /{id}    -> delete_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .patch(tasks::update_task)
                .delete(tasks::delete_task),
        )
}
