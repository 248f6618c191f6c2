//! # taskhub-database
//!
//! Store traits consumed by the auth core and services, PostgreSQL
//! repository implementations, and in-memory stores for development and
//! tests.

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{CredentialStore, Stores, TaskStore, UserStore};
