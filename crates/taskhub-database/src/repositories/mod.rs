//! PostgreSQL repository implementations.

pub mod task;
pub mod user;

pub use task::TaskRepository;
pub use user::UserRepository;
