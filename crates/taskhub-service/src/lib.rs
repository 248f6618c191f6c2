//! # taskhub-service
//!
//! Business logic for TaskHub. Services receive their stores and auth
//! components through constructors as `Arc` handles.

pub mod task;
pub mod user;

pub use task::TaskService;
pub use user::UserService;
