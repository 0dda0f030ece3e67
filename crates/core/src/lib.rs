//! Domain building blocks shared by the store and the HTTP layer.

pub mod error;
pub mod http_status;
pub mod pagination;
pub mod task_status;
pub mod types;
