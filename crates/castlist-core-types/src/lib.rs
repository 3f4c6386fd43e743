//! Core types shared across castlist facilities
//!
//! This crate holds the canonical field keys and event names used by the
//! logging facility and by error reporting, so every layer tags its events
//! the same way.

pub mod schema;
