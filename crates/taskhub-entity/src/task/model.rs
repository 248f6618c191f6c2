//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use taskhub_core::types::{TaskId, UserId};

use super::status::TaskStatus;

/// A task owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Short title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Progress status.
    pub status: TaskStatus,
    /// Owning user.
    pub user_id: UserId,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new task.
#[derive(Debug, Clone)]
pub struct CreateTask {
    /// Owning user.
    pub user_id: UserId,
    /// Short title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
}
