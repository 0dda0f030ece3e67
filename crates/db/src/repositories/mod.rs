//! Repository layer: one zero-sized struct per table.

pub mod task_repo;
pub mod user_repo;

pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
