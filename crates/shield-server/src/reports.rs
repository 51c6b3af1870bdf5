//! Report generation and on-disk storage of rendered documents.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use shield_config::ServerConfig;
use shield_core::entities::Report;
use shield_core::responses::ReportCreatedResponse;
use shield_report::render_report;
use tokio::io::AsyncWriteExt;

use crate::error::ServiceError;
use crate::pipeline;
use crate::state::AppState;

/// Give up after this many name collisions within one millisecond.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Directory generated PDFs are written to, and the URL prefix it is served under.
#[derive(Debug, Clone)]
pub struct ReportStorage {
    dir: PathBuf,
    url_prefix: String,
}

impl ReportStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, url_prefix: &str) -> Self {
        Self {
            dir: dir.into(),
            url_prefix: format!("/{}", url_prefix.trim().trim_matches('/')),
        }
    }

    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.reports_dir.clone(), &config.normalized_url_prefix())
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Leading slash, no trailing slash.
    #[must_use]
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    #[must_use]
    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.url_prefix.trim_end_matches('/'))
    }

    /// Write a new report file for `scan_id` and return its file name.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the directory or file cannot be written.
    pub async fn write_new(&self, scan_id: i64, bytes: &[u8]) -> io::Result<String> {
        self.write_new_at(scan_id, Utc::now().timestamp_millis(), bytes)
            .await
    }

    /// Files are created with create-new semantics; an existing name gets a
    /// numeric suffix instead of being overwritten. A partially written file
    /// is removed before the error is returned.
    pub(crate) async fn write_new_at(
        &self,
        scan_id: i64,
        millis: i64,
        bytes: &[u8],
    ) -> io::Result<String> {
        tokio::fs::create_dir_all(&self.dir).await?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = file_name(scan_id, millis, attempt);
            let path = self.dir.join(&name);
            let mut file = match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            };

            let written = match file.write_all(bytes).await {
                Ok(()) => file.sync_all().await,
                Err(e) => Err(e),
            };
            drop(file);

            if let Err(e) = written {
                if let Err(cleanup) = tokio::fs::remove_file(&path).await {
                    tracing::warn!(path = %path.display(), error = %cleanup, "failed to remove partial report");
                }
                return Err(e);
            }
            return Ok(name);
        }

        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("no free report file name for scan {scan_id}"),
        ))
    }
}

fn file_name(scan_id: i64, millis: i64, attempt: u32) -> String {
    if attempt == 0 {
        format!("report-{scan_id}-{millis}.pdf")
    } else {
        format!("report-{scan_id}-{millis}-{attempt}.pdf")
    }
}

/// Render the scan's report, store it, and record it.
///
/// Two calls for the same scan always produce two documents and two rows.
///
/// # Errors
///
/// Same preconditions as [`pipeline::get_scan`]; `ServiceError::Report` if
/// rendering or writing fails, in which case no row is created.
pub async fn generate_report(
    state: &AppState,
    raw_id: &str,
    user_id: &str,
) -> Result<ReportCreatedResponse, ServiceError> {
    let scan = pipeline::get_scan(state, raw_id, user_id).await?;
    let scan_id = scan.id;

    let rendered = tokio::task::spawn_blocking(move || render_report(&scan, Utc::now()))
        .await
        .map_err(|e| ServiceError::Report(format!("render task failed: {e}")))?
        .map_err(|e| ServiceError::Report(e.to_string()))?;

    let file_name = state
        .reports
        .write_new(scan_id, &rendered.bytes)
        .await
        .map_err(|e| ServiceError::Report(format!("write failed: {e}")))?;

    let url = state.reports.url_for(&file_name);
    let report = state.store.create_report(scan_id, &url).await?;

    tracing::info!(
        scan_id,
        report_id = report.id,
        pages = rendered.pages,
        url = %report.pdf_url,
        "report generated"
    );
    Ok(ReportCreatedResponse { url: report.pdf_url })
}

/// Reports generated for a scan, oldest first.
///
/// # Errors
///
/// Same preconditions as [`pipeline::get_scan`].
pub async fn list_reports(
    state: &AppState,
    raw_id: &str,
    user_id: &str,
) -> Result<Vec<Report>, ServiceError> {
    let scan = pipeline::get_scan(state, raw_id, user_id).await?;
    Ok(state.store.list_reports_for_scan(scan.id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prefix_is_normalized() {
        assert_eq!(ReportStorage::new("r", "reports/").url_prefix(), "/reports");
        assert_eq!(ReportStorage::new("r", "/static/reports").url_prefix(), "/static/reports");
        assert_eq!(ReportStorage::new("r", "/").url_prefix(), "/");
    }

    #[test]
    fn urls_join_prefix_and_name() {
        let storage = ReportStorage::new("r", "/reports");
        assert_eq!(storage.url_for("report-1-5.pdf"), "/reports/report-1-5.pdf");
        let root = ReportStorage::new("r", "/");
        assert_eq!(root.url_for("report-1-5.pdf"), "/report-1-5.pdf");
    }

    #[tokio::test]
    async fn same_millisecond_gets_a_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let storage = ReportStorage::new(dir.path().join("nested"), "/reports");

        let first = storage.write_new_at(4, 1_718_000_000_000, b"%PDF-a").await.unwrap();
        let second = storage.write_new_at(4, 1_718_000_000_000, b"%PDF-b").await.unwrap();

        assert_eq!(first, "report-4-1718000000000.pdf");
        assert_eq!(second, "report-4-1718000000000-1.pdf");
        assert_eq!(
            std::fs::read(dir.path().join("nested").join(&first)).unwrap(),
            b"%PDF-a"
        );
        assert_eq!(
            std::fs::read(dir.path().join("nested").join(&second)).unwrap(),
            b"%PDF-b"
        );
    }

    #[tokio::test]
    async fn unwritable_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let storage = ReportStorage::new(blocker.clone(), "/reports");
        assert!(storage.write_new(1, b"%PDF-").await.is_err());
    }
}
