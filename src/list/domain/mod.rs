//! Domain model for the task list.
//!
//! Pure types only: identifiers, validated titles, and the task entity.
//! Infrastructure concerns (the remote contract, shared state containers)
//! live outside the domain boundary.

mod error;
mod ids;
mod task;
mod title;

pub use error::ListDomainError;
pub use ids::TaskId;
pub use task::Task;
pub use title::TaskTitle;
