use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes mounted at `/users`.
///
/// ```text
/// GET    /        -> list_users
/// POST   /        -> create_user
/// GET    /{id}    -> get_user
/// PUT    /{id}    -> 405
/// PATCH  /{id}    -> 405
/// DELETE /{id}    -> 405
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::reject_user_mutation)
                .patch(users::reject_user_mutation)
                .delete(users::reject_user_mutation),
        )
}
