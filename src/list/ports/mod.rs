//! Port contracts crossed by the task-list services.

pub mod remote;
