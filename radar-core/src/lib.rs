//! Radar Core
//!
//! Core types for triggering and tracking remote API test runs.
//!
//! This crate contains:
//! - Domain types: test runs, their results and the aggregate verdict
//! - DTOs: wire envelopes returned by the trigger and result endpoints

pub mod domain;
pub mod dto;
