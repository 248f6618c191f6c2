//! Task domain entities.

pub mod model;
pub mod status;

pub use model::{CreateTask, Task};
pub use status::TaskStatus;
