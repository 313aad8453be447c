//! Core domain types
//!
//! These types are shared between the HTTP client (which produces them)
//! and the poll loop (which consumes and aggregates them).

pub mod run;
pub mod verdict;
