//! Validated task title text.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ListDomainError;

/// Task title: text that is non-empty after trimming.
///
/// The raw text is preserved as given — leading and trailing whitespace is
/// not stripped — only the trimmed form is checked during validation. The
/// remote store therefore receives exactly what the user typed.
///
/// # Examples
///
/// ```
/// use syncboard::list::domain::TaskTitle;
///
/// let title = TaskTitle::new("  Buy milk ").expect("valid title");
/// assert_eq!(title.as_str(), "  Buy milk ");
/// assert!(TaskTitle::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`ListDomainError::EmptyTitle`] when the value is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ListDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ListDomainError::EmptyTitle);
        }
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
