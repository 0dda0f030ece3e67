use taskdesk_db::Store;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store's tables sit behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Task and user tables.
    pub store: Store,
}
