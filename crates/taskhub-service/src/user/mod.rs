//! User registration.

pub mod service;

pub use service::{RegisteredUser, UserService};
