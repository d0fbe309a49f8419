//! Task-list synchronization between a local cache and a remote store.
//!
//! This module keeps an ordered, user-reorderable task sequence consistent
//! with a remote authoritative store while edits arrive rapidly. Create,
//! remove, toggle and rename confirm with the remote before touching local
//! state; the drag-reorder gesture is optimistic while in flight and commits
//! only on drop, rolling back by refetch when the commit is refused. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Shared state containers in [`state`]
//! - Orchestration services in [`services`]
//! - Derived projections in [`view`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;
