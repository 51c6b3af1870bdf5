//! Subcommand handlers.

pub mod analyze;
pub mod serve;
