pub mod health;
pub mod tasks;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tasks                 list, create
/// /tasks/{id}            get, update, delete
///
/// /users                 list, create
/// /users/{id}            get (update/delete answer 405)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tasks", tasks::router())
        .nest("/users", users::router())
}
