//! Task entity and its crate-internal mutation surface.

use serde::{Deserialize, Serialize};

use super::{TaskId, TaskTitle};

/// A single work item in the ordered sequence.
///
/// Tasks come into existence on a successful remote create and disappear on
/// a successful remote delete. Mutation outside this crate goes through the
/// sync controller or the reorder engine, never through the entity directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    completed: bool,
}

impl Task {
    /// Creates a fresh, not-yet-completed task.
    ///
    /// Intended for remote-store adapters assigning an identifier on create.
    #[must_use]
    pub const fn new(id: TaskId, title: TaskTitle) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }

    /// Reconstructs a task from its parts, completion state included.
    #[must_use]
    pub const fn from_parts(id: TaskId, title: TaskTitle, completed: bool) -> Self {
        Self {
            id,
            title,
            completed,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn set_title(&mut self, title: TaskTitle) {
        self.title = title;
    }

    pub(crate) const fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}
