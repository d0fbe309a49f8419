//! Derived, non-owning projections of the task store.

use std::sync::{Arc, PoisonError, RwLock};

use crate::list::domain::Task;
use crate::list::state::TaskStore;

/// Returns the tasks visible under the filter, preserving relative order.
///
/// With `hide_completed` unset this is the full sequence; otherwise the
/// subsequence of tasks not yet completed.
///
/// # Examples
///
/// ```
/// use syncboard::list::domain::{Task, TaskId, TaskTitle};
/// use syncboard::list::view::visible_tasks;
///
/// let open = Task::new(TaskId::new(), TaskTitle::new("Write docs")?);
/// let done = Task::from_parts(TaskId::new(), TaskTitle::new("Ship it")?, true);
/// let tasks = vec![open.clone(), done];
///
/// assert_eq!(visible_tasks(&tasks, false).len(), 2);
/// assert_eq!(visible_tasks(&tasks, true), vec![open]);
/// # Ok::<(), syncboard::list::domain::ListDomainError>(())
/// ```
#[must_use]
pub fn visible_tasks(tasks: &[Task], hide_completed: bool) -> Vec<Task> {
    if hide_completed {
        tasks
            .iter()
            .filter(|task| !task.completed())
            .cloned()
            .collect()
    } else {
        tasks.to_vec()
    }
}

/// Filtered projection of a [`TaskStore`].
///
/// The view owns nothing but the filter flag; every read recomputes from the
/// store, so it can never drift from the cached sequence. Flipping the
/// filter is local and makes no remote call. Clones share the flag.
#[derive(Debug, Clone)]
pub struct FilteredView {
    store: TaskStore,
    hide_completed: Arc<RwLock<bool>>,
}

impl FilteredView {
    /// Creates a view over the store with the filter off.
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            hide_completed: Arc::new(RwLock::new(false)),
        }
    }

    /// Returns whether completed tasks are hidden.
    #[must_use]
    pub fn hide_completed(&self) -> bool {
        *self
            .hide_completed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Flips the filter.
    pub fn toggle_hide_completed(&self) {
        let mut flag = self
            .hide_completed
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *flag = !*flag;
    }

    /// Returns the tasks currently visible under the filter.
    #[must_use]
    pub fn visible(&self) -> Vec<Task> {
        visible_tasks(&self.store.snapshot(), self.hide_completed())
    }
}
