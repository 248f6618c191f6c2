//! Owner-scoped task listing and creation.

pub mod service;

pub use service::TaskService;
