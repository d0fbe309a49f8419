//! Services orchestrating the shared containers and the remote store.
//!
//! The sync controller handles confirm-then-mutate edits; the reorder engine
//! handles the optimistic drag gesture. Both publish their outcomes on the
//! shared notice board and are the only writers to the task store.

pub mod reorder;
pub mod sync;

/// Notice shown whenever fetching the authoritative sequence fails.
pub(crate) const COULD_NOT_LOAD: &str = "Could not load tasks.";
