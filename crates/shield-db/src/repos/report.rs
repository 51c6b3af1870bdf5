//! Report repository.
//!
//! A report row is a pointer to a rendered document; it is written only after
//! the document exists on disk. Any number of reports may exist per scan.

use shield_core::entities::Report;

use crate::error::DatabaseError;
use crate::helpers::{now_timestamp, parse_datetime};
use crate::store::ShieldStore;

const REPORT_COLUMNS: &str = "id, scan_id, pdf_url, created_at";

impl ShieldStore {
    /// Record a generated report for `scan_id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the scan does not exist or the insert fails.
    pub async fn create_report(&self, scan_id: i64, pdf_url: &str) -> Result<Report, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO reports (scan_id, pdf_url, created_at)
                     VALUES (?1, ?2, ?3) RETURNING {REPORT_COLUMNS}"
                ),
                libsql::params![scan_id, pdf_url, now_timestamp()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_report(&row)
    }

    /// Get a report by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the report does not exist.
    #[cfg(test)]
    pub(crate) async fn get_report(&self, id: i64) -> Result<Report, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_report(&row)
    }

    /// Reports generated for `scan_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_reports_for_scan(&self, scan_id: i64) -> Result<Vec<Report>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {REPORT_COLUMNS} FROM reports WHERE scan_id = ?1
                     ORDER BY created_at ASC, id ASC"
                ),
                libsql::params![scan_id],
            )
            .await?;

        let mut reports = Vec::new();
        while let Some(row) = rows.next().await? {
            reports.push(row_to_report(&row)?);
        }
        Ok(reports)
    }
}

fn row_to_report(row: &libsql::Row) -> Result<Report, DatabaseError> {
    Ok(Report {
        id: row.get::<i64>(0)?,
        scan_id: row.get::<i64>(1)?,
        pdf_url: row.get::<String>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}
