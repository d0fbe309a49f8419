//! Single-slot notification board with self-expiring entries.
//!
//! The board holds at most one [`Notice`]. Publishing replaces the current
//! entry and schedules a fire-and-forget clearance; the clearance compares
//! generations before acting, so a stale timer never erases a newer notice.

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};
use std::time::Duration;

use mockable::Clock;

use super::domain::{Generation, Notice, NoticeKind};

/// Default display window before a notice clears itself.
pub const DISPLAY_WINDOW: Duration = Duration::from_secs(3);

/// Shared, replace-only container for the currently displayed notice.
///
/// Clones share the same slot, so a controller and the embedding surface can
/// each hold a handle. Lock poisoning is treated as recoverable: a poisoned
/// slot yields the last written state.
#[derive(Debug)]
pub struct NoticeBoard<C: Clock + Send + Sync> {
    state: Arc<RwLock<BoardState>>,
    clock: Arc<C>,
    window: Duration,
}

impl<C: Clock + Send + Sync> Clone for NoticeBoard<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
            window: self.window,
        }
    }
}

#[derive(Debug)]
struct BoardState {
    current: Option<Notice>,
    last_generation: Generation,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            current: None,
            last_generation: Generation::new(0),
        }
    }
}

impl<C: Clock + Send + Sync> NoticeBoard<C> {
    /// Creates an empty board using the default [`DISPLAY_WINDOW`].
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(BoardState::default())),
            clock,
            window: DISPLAY_WINDOW,
        }
    }

    /// Overrides the display window.
    #[must_use]
    pub const fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Returns the configured display window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Publishes a notice, replacing whatever is currently displayed.
    ///
    /// Clearance is scheduled immediately and fires after the display window
    /// unless a later publish has superseded the notice. The clearance task
    /// is not cancelled when the board is dropped.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime, which is required to
    /// schedule the clearance.
    pub fn publish(&self, message: impl Into<String>, kind: NoticeKind) {
        let generation = {
            let mut guard = self.write_state();
            let next = guard.last_generation.next();
            guard.last_generation = next;
            guard.current = Some(Notice {
                generation: next,
                message: message.into(),
                kind,
                created_at: self.clock.utc(),
            });
            next
        };

        let state = Arc::clone(&self.state);
        let window = self.window;
        drop(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            clear_entry(&state, generation);
        }));
    }

    /// Publishes a success notice.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn success(&self, message: impl Into<String>) {
        self.publish(message, NoticeKind::Success);
    }

    /// Publishes an error notice.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn error(&self, message: impl Into<String>) {
        self.publish(message, NoticeKind::Error);
    }

    /// Returns the currently displayed notice, if any.
    #[must_use]
    pub fn current(&self) -> Option<Notice> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .current
            .clone()
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, BoardState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the slot when its occupant still carries `generation`.
///
/// A mismatching generation means the notice has been superseded and the
/// stale clearance does nothing.
fn clear_entry(state: &RwLock<BoardState>, generation: Generation) {
    let mut guard = state.write().unwrap_or_else(PoisonError::into_inner);
    if guard
        .current
        .as_ref()
        .is_some_and(|notice| notice.generation == generation)
    {
        guard.current = None;
    }
}
