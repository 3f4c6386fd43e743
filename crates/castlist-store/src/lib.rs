//! castlist Store - SQLite persistence for roles and auditions
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded schema migrations with checksums
//! - Repository layer mapping `Role`/`Audition` records to rows
//! - Hydration of a Role together with its auditions

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
