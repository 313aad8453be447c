//! Poll layer
//!
//! Tracks the runs started by a trigger, queries each outstanding run once
//! per cycle until all of them reach a terminal status or the deadline
//! passes, then folds the results into a verdict.

mod poller;
mod state;

pub use poller::Poller;
