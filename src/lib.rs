//! Syncboard: optimistic synchronization for a reorderable task list.
//!
//! This crate keeps a locally cached, user-reorderable list of tasks
//! consistent with a remote authoritative store while the user performs
//! rapid, overlapping edits. Edits confirm with the remote before mutating
//! local state; drag-reordering is optimistic during the gesture and commits
//! the final order on drop, rolling back by refetch when the commit fails.
//! Outcomes surface through short-lived, self-expiring notices.
//!
//! # Architecture
//!
//! Syncboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the remote store
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`list`]: Task sequence, sync controller, reorder engine and views
//! - [`notice`]: Single-slot board of self-expiring status notices

pub mod list;
pub mod notice;
