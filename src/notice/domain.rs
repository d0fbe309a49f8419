//! Domain types for transient status notifications.
//!
//! A notification is a short-lived, user-facing record of an operation
//! outcome. Generations distinguish successive notifications so that a
//! delayed clearance can recognise when it has been superseded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonic token distinguishing successive notifications.
///
/// A scheduled clearance captures the generation it was created for and
/// becomes a no-op when the board has since moved past it.
///
/// # Examples
///
/// ```
/// use syncboard::notice::domain::Generation;
///
/// let first = Generation::new(1);
/// assert_eq!(first.value(), 1);
/// assert_eq!(first.next().value(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    /// Creates a generation token from a value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the next generation.
    ///
    /// Uses saturating arithmetic, so at `u64::MAX` it will not overflow but
    /// return `u64::MAX`. Unreachable in practice (one increment per
    /// notification).
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for Generation {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome flavour a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// The operation completed as requested.
    Success,
    /// The operation failed and local state reflects the last known-good
    /// value.
    Error,
}

impl NoticeKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single displayed notification.
///
/// Exactly one notice is visible at a time; publishing a new one replaces
/// the current one immediately. A notice otherwise clears itself once its
/// display window elapses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Token identifying this notice against later replacements.
    pub generation: Generation,
    /// User-facing message text.
    pub message: String,
    /// Whether the notice reports a success or a failure.
    pub kind: NoticeKind,
    /// Instant the notice was published.
    pub created_at: DateTime<Utc>,
}

impl Notice {
    /// Returns `true` when the notice reports a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, NoticeKind::Error)
    }
}
