//! Transient status notifications.
//!
//! Operations surface their outcomes as short-lived notices: exactly one is
//! visible at a time, a newer notice replaces the current one immediately,
//! and an undisturbed notice clears itself after a fixed display window.
//! Supersession is detected by generation comparison rather than by
//! cancelling the scheduled clearance.

pub mod board;
pub mod domain;
