//! Store traits and the bundle of store handles built at startup.
//!
//! The auth core only ever sees [`CredentialStore`]. Writes belong to the
//! user-management collaborator through [`UserStore`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use taskhub_core::config::{DatabaseConfig, DatabaseProvider};
use taskhub_core::result::AppResult;
use taskhub_core::types::UserId;
use taskhub_entity::task::{CreateTask, Task};
use taskhub_entity::user::{CreateUser, User};

use crate::connection::DatabasePool;
use crate::memory::{MemoryTaskStore, MemoryUserStore};
use crate::repositories::{TaskRepository, UserRepository};

/// Read-only user lookups needed to authenticate a caller.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;
}

/// User persistence for registration.
#[async_trait]
pub trait UserStore: CredentialStore {
    /// Insert a new user. Fails with a conflict error if the email is taken.
    async fn create(&self, user: CreateUser) -> AppResult<User>;
}

/// Task persistence.
#[async_trait]
pub trait TaskStore: Send + Sync + 'static {
    /// All tasks owned by a user, oldest first.
    async fn find_by_owner(&self, user_id: UserId) -> AppResult<Vec<Task>>;

    /// Insert a new task with the default status.
    async fn create(&self, task: CreateTask) -> AppResult<Task>;
}

/// Store handles shared by services and the auth core.
#[derive(Clone)]
pub struct Stores {
    /// Lookup-only view of the user store.
    pub credentials: Arc<dyn CredentialStore>,
    /// Full user store.
    pub users: Arc<dyn UserStore>,
    /// Task store.
    pub tasks: Arc<dyn TaskStore>,
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}

impl Stores {
    /// Build stores for the configured provider, running migrations for PostgreSQL.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Memory => {
                info!("Using in-memory stores; data will not survive a restart");
                Ok(Self::memory())
            }
            DatabaseProvider::Postgres => {
                let db = DatabasePool::connect(config).await?;
                db.migrate().await?;
                Ok(Self::postgres(&db))
            }
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn memory() -> Self {
        Self::from_parts(MemoryUserStore::new(), MemoryTaskStore::new())
    }

    /// PostgreSQL-backed stores sharing one pool.
    pub fn postgres(db: &DatabasePool) -> Self {
        Self::from_parts(
            UserRepository::new(db.pool()),
            TaskRepository::new(db.pool()),
        )
    }

    /// Wrap concrete stores; the user store backs both user handles.
    pub fn from_parts<U: UserStore, T: TaskStore>(users: U, tasks: T) -> Self {
        let users = Arc::new(users);
        Self {
            credentials: users.clone(),
            users,
            tasks: Arc::new(tasks),
        }
    }
}
