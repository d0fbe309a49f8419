//! Unit tests for the task-list domain, state, adapters and services.
