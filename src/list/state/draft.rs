//! In-progress text for a not-yet-created task.

use std::sync::{Arc, PoisonError, RwLock};

/// Thread-safe holder of the draft title text.
///
/// The draft mirrors whatever the user has typed so far, raw and untrimmed.
/// It is cleared by the sync controller on a successful create and left alone
/// on every failure path.
#[derive(Debug, Clone, Default)]
pub struct DraftInput {
    text: Arc<RwLock<String>>,
}

impl DraftInput {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the draft text.
    pub fn set(&self, text: impl Into<String>) {
        *self.write_text() = text.into();
    }

    /// Returns a copy of the current draft text.
    #[must_use]
    pub fn current(&self) -> String {
        self.text
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Empties the draft.
    pub fn clear(&self) {
        self.write_text().clear();
    }

    fn write_text(&self) -> std::sync::RwLockWriteGuard<'_, String> {
        self.text.write().unwrap_or_else(PoisonError::into_inner)
    }
}
