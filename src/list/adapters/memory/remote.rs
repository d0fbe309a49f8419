//! In-memory remote store for controller and gesture tests.

use async_trait::async_trait;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use crate::list::{
    domain::{Task, TaskId, TaskTitle},
    ports::remote::{RemoteTasks, RemoteTasksError, RemoteTasksResult},
};

/// Thread-safe in-memory stand-in for the remote authoritative store.
///
/// Besides the [`RemoteTasks`] contract it records every call it receives and
/// lets callers plant one-shot failures, so tests can assert on traffic and
/// exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRemoteTasks {
    state: Arc<RwLock<RemoteState>>,
}

#[derive(Debug, Default)]
struct RemoteState {
    tasks: Vec<Task>,
    calls: Vec<RemoteCall>,
    faults: Vec<RemoteCall>,
}

/// Identifies one [`RemoteTasks`] operation for recording and fault planting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteCall {
    /// A [`RemoteTasks::fetch_all`] call.
    FetchAll,
    /// A [`RemoteTasks::create`] call.
    Create,
    /// A [`RemoteTasks::remove`] call.
    Remove,
    /// A [`RemoteTasks::toggle`] call.
    Toggle,
    /// A [`RemoteTasks::rename`] call.
    Rename,
    /// A [`RemoteTasks::persist_order`] call.
    PersistOrder,
}

impl RemoteCall {
    /// Returns the operation name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FetchAll => "fetch_all",
            Self::Create => "create",
            Self::Remove => "remove",
            Self::Toggle => "toggle",
            Self::Rename => "rename",
            Self::PersistOrder => "persist_order",
        }
    }
}

impl fmt::Display for RemoteCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InMemoryRemoteTasks {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends tasks to the remote order without recording a call.
    pub fn preload<I>(&self, tasks: I)
    where
        I: IntoIterator<Item = Task>,
    {
        self.write_state().tasks.extend(tasks);
    }

    /// Returns a copy of the remote task sequence.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.read_state(|state| state.tasks.clone())
    }

    /// Returns the number of tasks held remotely.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_state(|state| state.tasks.len())
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_state(|state| state.tasks.is_empty())
    }

    /// Returns every call received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.read_state(|state| state.calls.clone())
    }

    /// Plants a one-shot failure for the next occurrence of `call`.
    ///
    /// Planting the same operation twice fails its next two occurrences.
    pub fn fail_next(&self, call: RemoteCall) {
        self.write_state().faults.push(call);
    }

    fn read_state<T>(&self, f: impl FnOnce(&RemoteState) -> T) -> T {
        let state = self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, RemoteState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records `call`, then consumes a planted fault for it if one exists.
    fn enter(&self, call: RemoteCall) -> RemoteTasksResult<RwLockWriteGuard<'_, RemoteState>> {
        let mut state = self.write_state();
        state.calls.push(call);
        if let Some(position) = state.faults.iter().position(|fault| *fault == call) {
            state.faults.remove(position);
            return Err(RemoteTasksError::Connectivity(format!(
                "planted outage during {call}"
            )));
        }
        Ok(state)
    }
}

fn position_of(state: &RemoteState, id: TaskId) -> RemoteTasksResult<usize> {
    state
        .tasks
        .iter()
        .position(|task| task.id() == id)
        .ok_or(RemoteTasksError::UnknownTask(id))
}

fn find_task_mut(state: &mut RemoteState, id: TaskId) -> RemoteTasksResult<&mut Task> {
    state
        .tasks
        .iter_mut()
        .find(|task| task.id() == id)
        .ok_or(RemoteTasksError::UnknownTask(id))
}

#[async_trait]
impl RemoteTasks for InMemoryRemoteTasks {
    async fn fetch_all(&self) -> RemoteTasksResult<Vec<Task>> {
        let state = self.enter(RemoteCall::FetchAll)?;
        Ok(state.tasks.clone())
    }

    async fn create(&self, title: &TaskTitle) -> RemoteTasksResult<Task> {
        let mut state = self.enter(RemoteCall::Create)?;
        let task = Task::new(TaskId::new(), title.clone());
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn remove(&self, id: TaskId) -> RemoteTasksResult<()> {
        let mut state = self.enter(RemoteCall::Remove)?;
        let position = position_of(&state, id)?;
        state.tasks.remove(position);
        Ok(())
    }

    async fn toggle(&self, id: TaskId) -> RemoteTasksResult<()> {
        let mut state = self.enter(RemoteCall::Toggle)?;
        find_task_mut(&mut state, id)?.toggle_completed();
        Ok(())
    }

    async fn rename(&self, id: TaskId, title: &TaskTitle) -> RemoteTasksResult<()> {
        let mut state = self.enter(RemoteCall::Rename)?;
        find_task_mut(&mut state, id)?.set_title(title.clone());
        Ok(())
    }

    async fn persist_order(&self, ordered: &[Task]) -> RemoteTasksResult<()> {
        let mut state = self.enter(RemoteCall::PersistOrder)?;
        state.tasks = ordered.to_vec();
        Ok(())
    }
}
