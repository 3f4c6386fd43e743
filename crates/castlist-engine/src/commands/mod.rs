//! Command handlers with boundary logging.

pub mod casting;
pub mod demo;
