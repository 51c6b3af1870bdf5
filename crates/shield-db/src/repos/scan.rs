//! Scan repository.
//!
//! Scans are insert-only: the analysis result is serialized once at creation
//! and never rewritten.

use shield_core::analysis::{AnalysisResult, clamp_score};
use shield_core::entities::{NewScan, Scan};
use shield_core::responses::ScanStats;

use crate::error::DatabaseError;
use crate::helpers::{get_count, now_timestamp, parse_datetime, parse_enum, parse_json};
use crate::store::ShieldStore;

const SCAN_COLUMNS: &str =
    "id, user_id, content, input_type, risk_score, risk_level, analysis_result, created_at";

impl ShieldStore {
    /// Persist a new scan. Score and level come from the analysis result.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the owning user does not exist or the insert fails.
    pub async fn create_scan(&self, scan: &NewScan) -> Result<Scan, DatabaseError> {
        let analysis_json = serde_json::to_string(&scan.analysis)
            .map_err(|e| DatabaseError::Other(e.into()))?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO scans (user_id, content, input_type, risk_score, risk_level, analysis_result, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING {SCAN_COLUMNS}"
                ),
                libsql::params![
                    scan.user_id.as_str(),
                    scan.content.as_str(),
                    scan.input_type.as_str(),
                    i64::from(scan.analysis.risk_score),
                    scan.analysis.risk_level.as_str(),
                    analysis_json,
                    now_timestamp()
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let created = row_to_scan(&row)?;

        tracing::debug!(
            scan_id = created.id,
            user_id = %created.user_id,
            risk_level = %created.risk_level,
            "scan stored"
        );
        Ok(created)
    }

    /// Get a scan by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the scan does not exist.
    pub async fn get_scan(&self, id: i64) -> Result<Scan, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SCAN_COLUMNS} FROM scans WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_scan(&row)
    }

    /// All scans owned by `user_id`, newest first. Ties on `created_at`
    /// are broken by descending ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_scans_for_user(&self, user_id: &str) -> Result<Vec<Scan>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SCAN_COLUMNS} FROM scans WHERE user_id = ?1
                     ORDER BY created_at DESC, id DESC"
                ),
                [user_id],
            )
            .await?;

        let mut scans = Vec::new();
        while let Some(row) = rows.next().await? {
            scans.push(row_to_scan(&row)?);
        }
        Ok(scans)
    }

    /// Dashboard counters for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn scan_stats(&self, user_id: &str) -> Result<ScanStats, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COUNT(*),
                        SUM(CASE WHEN risk_level IN ('high', 'critical') THEN 1 ELSE 0 END),
                        SUM(CASE WHEN risk_level = 'low' THEN 1 ELSE 0 END)
                 FROM scans WHERE user_id = ?1",
                [user_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;

        Ok(ScanStats {
            total_scans: get_count(&row, 0)?,
            high_risk: get_count(&row, 1)?,
            verified_safe: get_count(&row, 2)?,
        })
    }
}

fn row_to_scan(row: &libsql::Row) -> Result<Scan, DatabaseError> {
    let analysis = parse_json(&row.get::<String>(6)?)?;
    Ok(Scan {
        id: row.get::<i64>(0)?,
        user_id: row.get::<String>(1)?,
        content: row.get::<String>(2)?,
        input_type: parse_enum(&row.get::<String>(3)?)?,
        risk_score: clamp_score(row.get::<i64>(4)?),
        risk_level: parse_enum(&row.get::<String>(5)?)?,
        analysis_result: AnalysisResult::from_stored(&analysis),
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}
