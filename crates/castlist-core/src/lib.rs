//! castlist Core - in-memory casting model
//!
//! This crate provides the foundational data structures for the casting
//! tracker:
//! - `Role` and `Audition` records and the one-to-many link between them
//! - Derived queries over a role's auditions (actors, locations, lead, understudy)
//! - The call-back transition that marks an audition as hired
//! - Structured errors and the logging facility shared by all layers
//! - Plain-text rendering of a role report

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use errors::{CastingError, ExError, ExErrorKind, Result};
pub use model::{Audition, Role};

#[doc(hidden)]
pub use castlist_core_types::schema as __schema;
