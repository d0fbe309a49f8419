//! Shared state containers for the task-list services.
//!
//! Each piece of mutable state the services touch lives in its own
//! independently owned container. The containers are cheap to clone and share
//! their backing storage, so the embedding surface, the sync controller, and
//! the reorder engine can all hold handles to the same state.

mod draft;
mod store;

pub use draft::DraftInput;
pub use store::TaskStore;
