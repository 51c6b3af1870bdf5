//! Store layer that the repository modules hang off.
//!
//! `ShieldStore` wraps `ShieldDb`. All repo methods are implemented as
//! `impl ShieldStore` in `repos/*`. Each write is a single statement, so no
//! explicit transactions are opened.

use crate::ShieldDb;
use crate::error::DatabaseError;

pub struct ShieldStore {
    db: ShieldDb,
}

impl ShieldStore {
    /// Open a store backed by a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ShieldDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    #[must_use]
    pub const fn from_db(db: ShieldDb) -> Self {
        Self { db }
    }

    #[must_use]
    pub const fn db(&self) -> &ShieldDb {
        &self.db
    }
}
