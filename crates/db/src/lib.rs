//! In-process storage for tasks and users.
//!
//! [`Store`] is a cheaply cloneable handle shared by every request. The
//! repositories in [`repositories`] are the only code that touches the
//! tables directly.

pub mod models;
pub mod repositories;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use taskdesk_core::error::CoreError;
use taskdesk_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::task::Task;
use crate::models::user::User;

/// How long [`health_check`] waits for the read lock.
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// Shared handle to the task and user tables.
#[derive(Debug, Clone, Default)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

/// Rows keyed by id, so iteration is always in id order.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) tasks: BTreeMap<DbId, Task>,
    pub(crate) users: BTreeMap<DbId, User>,
    pub(crate) task_seq: Sequence,
    pub(crate) user_seq: Sequence,
}

/// Monotonic id generator. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub(crate) struct Sequence {
    last: DbId,
}

impl Sequence {
    pub(crate) fn next_id(&mut self) -> DbId {
        self.last += 1;
        self.last
    }
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn tables(&self) -> &RwLock<Tables> {
        &self.tables
    }
}

/// Verify the store is usable.
///
/// Fails if a read lock cannot be acquired within [`HEALTH_CHECK_TIMEOUT`],
/// which means a writer is stuck holding the lock.
pub async fn health_check(store: &Store) -> Result<(), CoreError> {
    tokio::time::timeout(HEALTH_CHECK_TIMEOUT, store.tables().read())
        .await
        .map(|_| ())
        .map_err(|_| CoreError::Internal("timed out waiting for store read lock".to_string()))
}
