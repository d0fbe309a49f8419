//! Step definitions for drag-reorder BDD scenarios.

pub mod world;

mod given;
mod then;
mod when;
