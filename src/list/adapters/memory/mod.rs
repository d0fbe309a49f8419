//! In-memory adapter implementations for testing.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! exercising the services without a live remote store.

mod remote;

pub use remote::{InMemoryRemoteTasks, RemoteCall};
