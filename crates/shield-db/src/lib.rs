//! # shield-db
//!
//! libSQL persistence for JobShield.
//!
//! Stores scans (one per submitted investigation), the reports generated from
//! them, and the users materialized from identity claims. The relational
//! schema lives in `migrations/` and is applied on every open.
//!
//! Repository methods are implemented as `impl ShieldStore` blocks under
//! [`repos`]; [`ShieldDb`] only owns the connection.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod store;

#[cfg(test)]
mod test_support;

use std::path::Path;

use error::DatabaseError;
use libsql::Builder;

pub use store::ShieldStore;

/// In-memory database path accepted by [`ShieldDb::open_local`].
pub const IN_MEMORY: &str = ":memory:";

/// Central database handle.
pub struct ShieldDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ShieldDb {
    /// Open a local database at the given path, creating its parent directory
    /// when needed. Pass `":memory:"` for a throwaway database.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created, the
    /// database cannot be opened, or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        if path != IN_MEMORY
            && let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // scans.user_id and reports.scan_id rely on this; it is per-connection.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let shield_db = Self { db, conn };
        shield_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(shield_db)
    }

    /// Raw connection, for repository code and schema tests.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
