//! Locally cached task sequence.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use crate::list::domain::{Task, TaskId, TaskTitle};

/// Thread-safe holder of the locally cached, ordered task sequence.
///
/// The store is a dumb container: it preserves insertion order and id
/// uniqueness but applies no other rules. All mutation goes through the sync
/// controller and the reorder engine, which decide when remote confirmation
/// must precede a local write.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current sequence in order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.read_tasks(Clone::clone)
    }

    /// Returns the number of cached tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_tasks(Vec::len)
    }

    /// Returns `true` when no tasks are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_tasks(Vec::is_empty)
    }

    /// Returns a copy of the task with the given id, if cached.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<Task> {
        self.read_tasks(|tasks| tasks.iter().find(|task| task.id() == id).cloned())
    }

    /// Returns the position of the task with the given id in the sequence.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.read_tasks(|tasks| tasks.iter().position(|task| task.id() == id))
    }

    /// Replaces the whole sequence, keeping the first task for any repeated id.
    pub(crate) fn replace_all(&self, tasks: Vec<Task>) {
        let mut seen = HashSet::new();
        let deduped: Vec<Task> = tasks
            .into_iter()
            .filter(|task| seen.insert(task.id()))
            .collect();
        *self.write_tasks() = deduped;
    }

    /// Drops the task with the given id, preserving the order of the rest.
    pub(crate) fn remove(&self, id: TaskId) {
        self.write_tasks().retain(|task| task.id() != id);
    }

    /// Flips the completion flag of the task with the given id, if cached.
    pub(crate) fn toggle(&self, id: TaskId) {
        if let Some(task) = find_mut(&mut self.write_tasks(), id) {
            task.toggle_completed();
        }
    }

    /// Replaces the title of the task with the given id, if cached.
    pub(crate) fn rename(&self, id: TaskId, title: TaskTitle) {
        if let Some(task) = find_mut(&mut self.write_tasks(), id) {
            task.set_title(title);
        }
    }

    /// Moves the source task to the slot the target task occupies.
    ///
    /// Both positions are resolved against the full sequence before the
    /// source is taken out, then the source is reinserted at the target's
    /// original index. No-ops when the ids match or either id is absent.
    /// Returns `true` when the sequence changed.
    pub(crate) fn move_task(&self, source: TaskId, target: TaskId) -> bool {
        if source == target {
            return false;
        }
        let mut tasks = self.write_tasks();
        let Some(from) = tasks.iter().position(|task| task.id() == source) else {
            return false;
        };
        let Some(to) = tasks.iter().position(|task| task.id() == target) else {
            return false;
        };
        let moved = tasks.remove(from);
        tasks.insert(to, moved);
        true
    }

    fn read_tasks<T>(&self, f: impl FnOnce(&Vec<Task>) -> T) -> T {
        let tasks = self
            .tasks
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&tasks)
    }

    fn write_tasks(&self) -> RwLockWriteGuard<'_, Vec<Task>> {
        self.tasks.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn find_mut(tasks: &mut [Task], id: TaskId) -> Option<&mut Task> {
    tasks.iter_mut().find(|task| task.id() == id)
}
