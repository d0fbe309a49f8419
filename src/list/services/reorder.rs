//! Drag-reorder state machine layered on the shared task store.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};
use mockable::Clock;
use thiserror::Error;

use crate::list::{
    domain::TaskId,
    ports::remote::{RemoteTasks, RemoteTasksError},
    state::TaskStore,
};
use crate::notice::board::NoticeBoard;

use super::COULD_NOT_LOAD;

/// Transient record of an in-flight drag gesture.
///
/// A session exists only between `drag_start` and `drag_end`; its absence
/// means no reorder is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    source: TaskId,
    // Debounces repeated enter events for the row most recently hovered.
    last_target: Option<TaskId>,
}

impl DragSession {
    /// Returns the id of the task being dragged.
    #[must_use]
    pub const fn source(&self) -> TaskId {
        self.source
    }
}

/// Service-level errors for reorder commits.
#[derive(Debug, Error)]
pub enum ReorderError {
    /// The remote store refused to persist the new order.
    #[error(transparent)]
    Remote(#[from] RemoteTasksError),
}

/// Result type for reorder engine operations.
pub type ReorderResult<T> = Result<T, ReorderError>;

/// Two-state drag machine: idle, or dragging one task.
///
/// Hops during a drag mutate the shared store immediately; they are purely
/// visual until the drop. Only `drag_end` talks to the remote store, and a
/// refused commit rolls the whole gesture back by refetching the
/// authoritative order. Clones share the same session, so the embedding
/// surface and the engine observe one gesture.
///
/// `drag_end` must run inside a Tokio runtime because publishing a notice
/// schedules its clearance on the runtime.
#[derive(Clone)]
pub struct ReorderEngine<R, C>
where
    R: RemoteTasks,
    C: Clock + Send + Sync,
{
    remote: Arc<R>,
    store: TaskStore,
    notices: NoticeBoard<C>,
    session: Arc<RwLock<Option<DragSession>>>,
}

impl<R, C> ReorderEngine<R, C>
where
    R: RemoteTasks,
    C: Clock + Send + Sync,
{
    /// Creates an idle engine over the shared containers.
    #[must_use]
    pub fn new(remote: Arc<R>, store: TaskStore, notices: NoticeBoard<C>) -> Self {
        Self {
            remote,
            store,
            notices,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the current drag session, if a gesture is in flight.
    #[must_use]
    pub fn session(&self) -> Option<DragSession> {
        *self.read_session()
    }

    /// Begins a drag gesture for the task with the given id.
    ///
    /// A still-open previous session is overwritten; the newest gesture
    /// wins.
    pub fn drag_start(&self, id: TaskId) {
        *self.write_session() = Some(DragSession {
            source: id,
            last_target: None,
        });
    }

    /// Records the pointer crossing the row of `target`.
    ///
    /// Moves the dragged task into the slot `target` occupies, resolved
    /// against the full unfiltered sequence. No-ops while idle, when the
    /// target is the dragged task itself, or when either id has left the
    /// sequence. Repeated enters for the row hovered last are idempotent;
    /// crossing any other row re-arms the target.
    pub fn drag_enter(&self, target: TaskId) {
        let source = {
            let mut guard = self.write_session();
            let Some(session) = guard.as_mut() else {
                return;
            };
            if session.last_target == Some(target) {
                return;
            }
            session.last_target = Some(target);
            session.source
        };
        self.store.move_task(source, target);
    }

    /// Ends the gesture and commits the current order to the remote store.
    ///
    /// The session is cleared before the commit is issued. A gesture that
    /// never moved anything still commits, as a harmless unchanged-order
    /// write. While idle this is a local no-op and no remote call is made.
    ///
    /// # Errors
    ///
    /// Returns [`ReorderError::Remote`] when the commit fails. An error
    /// notice is published and the gesture's moves are discarded by
    /// refetching the authoritative order; if that refetch also fails, the
    /// load notice replaces the commit notice and the local sequence keeps
    /// the uncommitted order.
    pub async fn drag_end(&self) -> ReorderResult<()> {
        if self.take_session().is_none() {
            return Ok(());
        }
        let ordered = self.store.snapshot();
        debug!("committing order of {count} tasks", count = ordered.len());
        if let Err(err) = self.remote.persist_order(&ordered).await {
            warn!("persisting order failed: {err}");
            self.notices.error("Could not save the new order.");
            self.rollback().await;
            return Err(ReorderError::Remote(err));
        }
        Ok(())
    }

    /// Discards the gesture's accumulated moves by re-anchoring the cache on
    /// the remote order.
    async fn rollback(&self) {
        match self.remote.fetch_all().await {
            Ok(tasks) => self.store.replace_all(tasks),
            Err(err) => {
                warn!("rollback refetch failed: {err}");
                self.notices.error(COULD_NOT_LOAD);
            }
        }
    }

    fn take_session(&self) -> Option<DragSession> {
        self.write_session().take()
    }

    fn read_session(&self) -> RwLockReadGuard<'_, Option<DragSession>> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_session(&self) -> RwLockWriteGuard<'_, Option<DragSession>> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }
}
