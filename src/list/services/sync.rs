//! Sync controller translating user intents into remote calls and notices.

use std::sync::Arc;

use log::{debug, warn};
use mockable::Clock;
use thiserror::Error;

use crate::list::{
    domain::{ListDomainError, Task, TaskId, TaskTitle},
    ports::remote::{RemoteTasks, RemoteTasksError},
    state::{DraftInput, TaskStore},
};
use crate::notice::board::NoticeBoard;

use super::COULD_NOT_LOAD;

/// Service-level errors for sync controller operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Title validation failed.
    #[error(transparent)]
    Domain(#[from] ListDomainError),
    /// A remote mutation failed.
    #[error(transparent)]
    Remote(#[from] RemoteTasksError),
    /// Fetching the authoritative sequence failed.
    #[error("could not load tasks: {0}")]
    Load(RemoteTasksError),
}

/// Result type for sync controller operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Confirm-then-mutate controller for create, remove, toggle and rename.
///
/// Every operation validates first, then calls the remote store, and only
/// mutates the local cache once the remote has confirmed. Local state never
/// shows an edit the remote might still refuse; the cost is perceived latency
/// rather than divergence. Outcomes are normalized into notices on the shared
/// board.
///
/// Operations must run inside a Tokio runtime because publishing a notice
/// schedules its clearance on the runtime.
pub struct SyncController<R, C>
where
    R: RemoteTasks,
    C: Clock + Send + Sync,
{
    remote: Arc<R>,
    store: TaskStore,
    draft: DraftInput,
    notices: NoticeBoard<C>,
}

impl<R, C> Clone for SyncController<R, C>
where
    R: RemoteTasks,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            remote: Arc::clone(&self.remote),
            store: self.store.clone(),
            draft: self.draft.clone(),
            notices: self.notices.clone(),
        }
    }
}

impl<R, C> SyncController<R, C>
where
    R: RemoteTasks,
    C: Clock + Send + Sync,
{
    /// Creates a controller over the shared state containers.
    #[must_use]
    pub const fn new(
        remote: Arc<R>,
        store: TaskStore,
        draft: DraftInput,
        notices: NoticeBoard<C>,
    ) -> Self {
        Self {
            remote,
            store,
            draft,
            notices,
        }
    }

    /// Replaces the local cache with the remote store's authoritative order.
    ///
    /// Used on startup and whenever local state must be re-anchored. Returns
    /// the sequence now held locally.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Load`] when the fetch fails; an error notice is
    /// published and the cache keeps its prior contents.
    pub async fn load(&self) -> SyncResult<Vec<Task>> {
        let tasks = self.reload().await?;
        debug!("loaded {count} tasks", count = tasks.len());
        Ok(tasks)
    }

    /// Creates a task from `text` and re-anchors the cache on the remote.
    ///
    /// Fails fast with an error notice when `text` is empty after trimming;
    /// no remote call is made. Otherwise the remote create is followed by a
    /// full reload, so local ordering and ids exactly mirror the remote
    /// store. On success the draft input is cleared and a success notice is
    /// published. The created task is returned as the remote reported it.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Domain`] for an empty title,
    /// [`SyncError::Remote`] when the create fails and [`SyncError::Load`]
    /// when the follow-up reload fails. Each failure publishes an error
    /// notice and leaves the draft untouched.
    pub async fn add(&self, text: &str) -> SyncResult<Task> {
        let title = TaskTitle::new(text).map_err(|err| {
            self.notices.error("A task cannot be empty.");
            SyncError::Domain(err)
        })?;
        let created = self
            .remote
            .create(&title)
            .await
            .map_err(|err| self.fail("Could not create task.", err))?;
        self.reload().await?;
        self.draft.clear();
        self.notices.success("Task created.");
        Ok(created)
    }

    /// Deletes a task remotely, then drops it from the local cache.
    ///
    /// The local task stays visible until the remote confirms. Removing an
    /// id the cache no longer holds is a safe local no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Remote`] when the remote delete fails; an error
    /// notice is published and the cache is unchanged.
    pub async fn remove(&self, id: TaskId) -> SyncResult<()> {
        self.remote
            .remove(id)
            .await
            .map_err(|err| self.fail("Could not remove task.", err))?;
        self.store.remove(id);
        self.notices.success("Task removed.");
        Ok(())
    }

    /// Flips a task's completion flag remotely, then locally.
    ///
    /// Success is silent: completion state is its own feedback.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Remote`] when the remote toggle fails; an error
    /// notice is published and the cache is unchanged.
    pub async fn toggle(&self, id: TaskId) -> SyncResult<()> {
        self.remote
            .toggle(id)
            .await
            .map_err(|err| self.fail("Could not update task.", err))?;
        self.store.toggle(id);
        Ok(())
    }

    /// Replaces a task's title remotely, then locally.
    ///
    /// An empty title after trimming is a silent no-op, unlike [`add`],
    /// which notifies. The raw text is preserved as typed.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Remote`] when the remote rename fails; an error
    /// notice is published and the cache is unchanged.
    ///
    /// [`add`]: SyncController::add
    pub async fn rename(&self, id: TaskId, text: &str) -> SyncResult<()> {
        let Ok(title) = TaskTitle::new(text) else {
            return Ok(());
        };
        self.remote
            .rename(id, &title)
            .await
            .map_err(|err| self.fail("Could not rename task.", err))?;
        self.store.rename(id, title);
        self.notices.success("Task renamed.");
        Ok(())
    }

    /// Replaces the draft title text.
    pub fn set_draft(&self, text: impl Into<String>) {
        self.draft.set(text);
    }

    /// Returns the current draft title text.
    #[must_use]
    pub fn draft(&self) -> String {
        self.draft.current()
    }

    /// Submits the current draft through [`add`](SyncController::add).
    ///
    /// # Errors
    ///
    /// Propagates whatever [`add`](SyncController::add) returns.
    pub async fn submit_draft(&self) -> SyncResult<Task> {
        let text = self.draft.current();
        self.add(&text).await
    }

    /// Fetches the authoritative sequence and replaces the cache with it.
    ///
    /// On failure the load notice is published and the cache keeps its prior
    /// contents.
    async fn reload(&self) -> SyncResult<Vec<Task>> {
        match self.remote.fetch_all().await {
            Ok(tasks) => {
                self.store.replace_all(tasks);
                Ok(self.store.snapshot())
            }
            Err(err) => {
                warn!("loading tasks failed: {err}");
                self.notices.error(COULD_NOT_LOAD);
                Err(SyncError::Load(err))
            }
        }
    }

    /// Logs a failed remote mutation, publishes `message` and wraps the
    /// error.
    fn fail(&self, message: &'static str, err: RemoteTasksError) -> SyncError {
        warn!("remote operation failed: {err}");
        self.notices.error(message);
        SyncError::Remote(err)
    }
}
