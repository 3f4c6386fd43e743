//! castlist Engine - casting commands over the store
//!
//! Each command composes the model and store layers and owns the
//! start/end lifecycle logging for its operation.

pub mod commands;
