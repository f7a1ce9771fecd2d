//! Shared domain primitives for the catchup media tracker.
//!
//! Holds the id/timestamp aliases, the domain error type and the pure
//! rules (id parsing, watched-state transitions) used by the db and api
//! crates. Nothing in here performs I/O.

pub mod error;
pub mod types;
pub mod watch;
