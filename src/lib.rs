//! Command-line harness that delegates a TSP instance to an external
//! solver process and relays its answer.
//!
//! The crate does not solve anything itself. It stages the caller's
//! problem text to disk, launches an independently built solver as a
//! child process bound to that file, waits for it to finish, and returns
//! its trimmed stdout. The staged file is removed on every exit path.

pub mod consts;
pub mod geometry;
pub mod harness;
pub mod staging;
pub mod worker;
