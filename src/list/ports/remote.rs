//! Remote collaborator port for the authoritative task store.

use async_trait::async_trait;
use thiserror::Error;

use crate::list::domain::{Task, TaskId, TaskTitle};

/// Result type for remote store operations.
pub type RemoteTasksResult<T> = Result<T, RemoteTasksError>;

/// Contract with the remote authoritative store.
///
/// Transport and format are adapter concerns. Every operation is assumed
/// atomic: it either fully succeeds or fails with no partial effect. The
/// controller layered on top performs no retries; a failed call surfaces to
/// the user and local state stays at its last known-good value.
#[async_trait]
pub trait RemoteTasks: Send + Sync {
    /// Returns the full task sequence in the remote store's recorded order.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTasksError::Connectivity`] when the store cannot be
    /// reached.
    async fn fetch_all(&self) -> RemoteTasksResult<Vec<Task>>;

    /// Creates a task from a title, assigning its identifier.
    ///
    /// The new task is appended to the remote order.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTasksError`] when the store refuses the create.
    async fn create(&self, title: &TaskTitle) -> RemoteTasksResult<Task>;

    /// Deletes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTasksError::UnknownTask`] when no such task exists
    /// remotely.
    async fn remove(&self, id: TaskId) -> RemoteTasksResult<()>;

    /// Flips the completion flag of the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTasksError::UnknownTask`] when no such task exists
    /// remotely.
    async fn toggle(&self, id: TaskId) -> RemoteTasksResult<()>;

    /// Replaces the title of the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTasksError::UnknownTask`] when no such task exists
    /// remotely.
    async fn rename(&self, id: TaskId, title: &TaskTitle) -> RemoteTasksResult<()>;

    /// Replaces the remote-side order wholesale with the given sequence.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTasksError`] when the store refuses the replacement.
    async fn persist_order(&self, ordered: &[Task]) -> RemoteTasksResult<()>;
}

/// Errors returned by remote store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteTasksError {
    /// The store could not be reached at all.
    #[error("remote store unreachable: {0}")]
    Connectivity(String),

    /// The store has no task with this identifier.
    #[error("remote store has no task {0}")]
    UnknownTask(TaskId),

    /// The store refused the operation for a reason of its own.
    #[error("remote store rejected the operation: {0}")]
    Rejected(String),
}
