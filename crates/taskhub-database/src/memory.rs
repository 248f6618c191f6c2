//! In-process stores backed by `DashMap`.
//!
//! Suitable for development and tests only; nothing is persisted.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use taskhub_core::error::AppError;
use taskhub_core::result::AppResult;
use taskhub_core::types::{TaskId, UserId};
use taskhub_entity::task::{CreateTask, Task, TaskStatus};
use taskhub_entity::user::{CreateUser, User};

use crate::store::{CredentialStore, TaskStore, UserStore};

/// In-memory user store with a unique email index.
#[derive(Debug, Default, Clone)]
pub struct MemoryUserStore {
    users: Arc<DashMap<UserId, User>>,
    by_email: Arc<DashMap<String, UserId>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .by_email
            .get(email)
            .and_then(|id| self.users.get(id.value()).map(|u| u.value().clone())))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: CreateUser) -> AppResult<User> {
        // The email entry guard is held until the user row exists.
        match self.by_email.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("Email already in use")),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let row = User {
                    id: UserId::new(),
                    email: user.email,
                    password_hash: user.password_hash,
                    created_at: now,
                    updated_at: now,
                };
                self.users.insert(row.id, row.clone());
                slot.insert(row.id);
                Ok(row)
            }
        }
    }
}

/// In-memory task store.
#[derive(Debug, Default, Clone)]
pub struct MemoryTaskStore {
    tasks: Arc<DashMap<TaskId, Task>>,
}

impl MemoryTaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn find_by_owner(&self, user_id: UserId) -> AppResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| t.user_id == user_id)
            .map(|t| t.value().clone())
            .collect();
        tasks.sort_by_key(|t| t.created_at);
        Ok(tasks)
    }

    async fn create(&self, task: CreateTask) -> AppResult<Task> {
        let now = Utc::now();
        let row = Task {
            id: TaskId::new(),
            title: task.title,
            description: task.description,
            status: TaskStatus::default(),
            user_id: task.user_id,
            created_at: now,
            updated_at: now,
        };
        self.tasks.insert(row.id, row.clone());
        Ok(row)
    }
}
