//! Task listing and creation for the authenticated caller.

use std::sync::Arc;

use tracing::info;

use taskhub_auth::Identity;
use taskhub_core::error::AppError;
use taskhub_database::store::TaskStore;
use taskhub_entity::task::{CreateTask, Task};

/// Owner-scoped task operations. The owner is always the caller.
#[derive(Clone)]
pub struct TaskService {
    /// Task store.
    tasks: Arc<dyn TaskStore>,
}

impl std::fmt::Debug for TaskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskService").finish_non_exhaustive()
    }
}

impl TaskService {
    /// Creates a new task service.
    pub fn new(tasks: Arc<dyn TaskStore>) -> Self {
        Self { tasks }
    }

    /// Lists the caller's tasks, oldest first.
    pub async fn list(&self, caller: &Identity) -> Result<Vec<Task>, AppError> {
        self.tasks.find_by_owner(caller.id).await
    }

    /// Creates a pending task owned by the caller.
    pub async fn create(
        &self,
        caller: &Identity,
        title: &str,
        description: Option<String>,
    ) -> Result<Task, AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        let description = description.filter(|d| !d.trim().is_empty());

        let task = self
            .tasks
            .create(CreateTask {
                user_id: caller.id,
                title: title.to_string(),
                description,
            })
            .await?;

        info!(task_id = %task.id, user_id = %caller.id, "Task created");
        Ok(task)
    }
}
