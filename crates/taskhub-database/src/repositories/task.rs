//! Task repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use taskhub_core::error::{AppError, ErrorKind};
use taskhub_core::result::AppResult;
use taskhub_core::types::{TaskId, UserId};
use taskhub_entity::task::{CreateTask, Task};

use crate::store::TaskStore;

const TASK_COLUMNS: &str = "id, title, description, status, user_id, created_at, updated_at";

/// Repository for owner-scoped task queries.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    /// Create a new task repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for TaskRepository {
    async fn find_by_owner(&self, user_id: UserId) -> AppResult<Vec<Task>> {
        sqlx::query_as::<_, Task>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = $1 ORDER BY created_at"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tasks", e))
    }

    async fn create(&self, task: CreateTask) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (id, title, description, user_id) VALUES ($1, $2, $3, $4) \
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(TaskId::new())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create task", e))
    }
}
