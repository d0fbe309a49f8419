//! Adapters implementing the task-list ports.
//!
//! Concrete implementations of [`RemoteTasks`] live here. The services only
//! ever see the port trait, so swapping an HTTP client for the in-memory
//! store is a wiring change, not a service change.
//!
//! [`RemoteTasks`]: crate::list::ports::remote::RemoteTasks

pub mod memory;
