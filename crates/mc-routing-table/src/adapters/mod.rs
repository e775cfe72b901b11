//! Adapters Layer - File formats for routing tables
//!
//! - `json`: machine-wide routing tables as a JSON document

pub mod json;
