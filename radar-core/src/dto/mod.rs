//! Data Transfer Objects
//!
//! Envelopes of the JSON bodies returned by the trigger endpoint and the
//! result endpoint. Both wrap their payload in a top-level `data` field.

pub mod result;
pub mod trigger;
