//! Repository for the tasks table.

use chrono::Utc;
use taskdesk_core::error::CoreError;
use taskdesk_core::pagination::{Page, PageRequest};
use taskdesk_core::task_status::TaskStatus;
use taskdesk_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::Store;

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// The owning user must exist. Status defaults to `pending`.
    pub async fn create(store: &Store, input: &CreateTask) -> Result<Task, CoreError> {
        let title = normalize_title(&input.title)?;
        let status = parse_status(input.status.as_deref())?.unwrap_or_default();

        let mut tables = store.tables().write().await;

        if !tables.users.contains_key(&input.user_id) {
            return Err(CoreError::Validation(
                "The selected user_id is invalid.".to_string(),
            ));
        }

        let now = Utc::now();
        let task = Task {
            id: tables.task_seq.next_id(),
            title,
            description: input.description.clone(),
            status,
            user_id: input.user_id,
            created_at: now,
            updated_at: now,
        };
        tables.tasks.insert(task.id, task.clone());

        Ok(task)
    }

    /// Find a task by its ID.
    pub async fn find_by_id(store: &Store, id: DbId) -> Result<Option<Task>, CoreError> {
        let tables = store.tables().read().await;
        Ok(tables.tasks.get(&id).cloned())
    }

    /// List tasks in id order, optionally restricted to one user.
    pub async fn list(
        store: &Store,
        request: PageRequest,
        user_id: Option<DbId>,
    ) -> Result<Page<Task>, CoreError> {
        let tables = store.tables().read().await;
        let matching: Vec<Task> = tables
            .tasks
            .values()
            .filter(|task| user_id.map_or(true, |uid| task.user_id == uid))
            .cloned()
            .collect();

        Ok(Page::from_sorted(matching, request))
    }

    /// Apply a partial update. Returns `None` if no task has this id.
    pub async fn update(
        store: &Store,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, CoreError> {
        let title = input.title.as_deref().map(normalize_title).transpose()?;
        let status = parse_status(input.status.as_deref())?;

        let mut tables = store.tables().write().await;
        let Some(task) = tables.tasks.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = &input.description {
            task.description = Some(description.clone());
        }
        if let Some(status) = status {
            task.status = status;
        }
        task.updated_at = Utc::now();

        Ok(Some(task.clone()))
    }

    /// Delete a task. Returns `true` if a row was removed.
    pub async fn delete(store: &Store, id: DbId) -> Result<bool, CoreError> {
        let mut tables = store.tables().write().await;
        Ok(tables.tasks.remove(&id).is_some())
    }
}

/// Trim a title and reject one that is blank after trimming.
fn normalize_title(title: &str) -> Result<String, CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "The title field is required.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn parse_status(status: Option<&str>) -> Result<Option<TaskStatus>, CoreError> {
    status.map(str::parse).transpose()
}
