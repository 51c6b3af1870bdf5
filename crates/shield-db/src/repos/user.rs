//! User repository.
//!
//! Users are materialized from identity claims: the HTTP layer upserts the
//! authenticated principal on every request before touching scans.

use shield_core::entities::{NewUser, User};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, now_timestamp, parse_datetime};
use crate::store::ShieldStore;

const USER_COLUMNS: &str = "id, email, display_name, created_at, updated_at";

impl ShieldStore {
    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the user does not exist.
    #[cfg(test)]
    pub(crate) async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    /// Look a user up by email. Returns the earliest-created match, if any.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {USER_COLUMNS} FROM users WHERE email = ?1 ORDER BY created_at ASC LIMIT 1"
                ),
                [email],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a user with the same ID already exists.
    pub async fn create_user(&self, user: &NewUser) -> Result<User, DatabaseError> {
        let now = now_timestamp();
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO users (id, email, display_name, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?4) RETURNING {USER_COLUMNS}"
                ),
                libsql::params![
                    user.id.as_str(),
                    user.email.as_deref(),
                    user.display_name.as_deref(),
                    now
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    /// Insert the user, or refresh its profile fields if it already exists.
    ///
    /// Profile fields absent from `user` keep their stored values;
    /// `created_at` is never changed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn upsert_user(&self, user: &NewUser) -> Result<User, DatabaseError> {
        let now = now_timestamp();
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO users (id, email, display_name, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?4)
                     ON CONFLICT(id) DO UPDATE SET
                         email = COALESCE(excluded.email, users.email),
                         display_name = COALESCE(excluded.display_name, users.display_name),
                         updated_at = excluded.updated_at
                     RETURNING {USER_COLUMNS}"
                ),
                libsql::params![
                    user.id.as_str(),
                    user.email.as_deref(),
                    user.display_name.as_deref(),
                    now
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }
}

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get::<String>(0)?,
        email: get_opt_string(row, 1)?,
        display_name: get_opt_string(row, 2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}
