//! Repository modules implementing persistence operations for all JobShield entities.
//!
//! Each module adds methods to `ShieldStore` via `impl ShieldStore` blocks.

pub mod report;
pub mod scan;
pub mod user;
