//! Entity structs for all persisted JobShield records.
//!
//! Each entity maps to a table in the libSQL database (see `shield-db`
//! migrations). Entities serialize with `camelCase` keys, which is the shape
//! the HTTP API returns.

mod report;
mod scan;
mod user;

pub use report::Report;
pub use scan::{NewScan, Scan};
pub use user::{NewUser, User};
