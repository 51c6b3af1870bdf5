//! Scan pipeline: validate, analyze, persist.
//!
//! Validation runs against the raw JSON body so a bad request is rejected
//! before any provider is called or any row is written.

use serde_json::Value;
use shield_core::entities::{NewScan, Scan, User};
use shield_core::enums::InputType;
use shield_core::errors::CoreError;
use shield_core::responses::ScanStats;

use crate::error::ServiceError;
use crate::state::AppState;

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub content: String,
    pub input_type: InputType,
}

/// Check the `content` and `inputType` fields of a scan submission.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the first offending field.
pub fn validate_scan_request(body: &Value) -> Result<ScanRequest, CoreError> {
    let content = match body.get("content") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::String(_)) | None | Some(Value::Null) => {
            return Err(CoreError::validation("content", "Content is required"));
        }
        Some(_) => return Err(CoreError::validation("content", "Content must be a string")),
    };

    let input_type = body
        .get("inputType")
        .and_then(Value::as_str)
        .and_then(InputType::parse)
        .ok_or_else(|| {
            let allowed = InputType::ALL.map(InputType::as_str).join(", ");
            CoreError::validation("inputType", format!("Input type must be one of: {allowed}"))
        })?;

    Ok(ScanRequest { content, input_type })
}

/// Validate a submission, run the analysis chain, and persist the scan.
///
/// # Errors
///
/// Returns `ServiceError::Validation` for a bad body, or a database error.
/// Provider failures never surface here.
pub async fn create_scan(state: &AppState, user: &User, body: &Value) -> Result<Scan, ServiceError> {
    let request = validate_scan_request(body)?;

    let outcome = state
        .analyzer
        .analyze(&request.content, request.input_type)
        .await;

    let scan = state
        .store
        .create_scan(&NewScan {
            user_id: user.id.clone(),
            content: request.content,
            input_type: request.input_type,
            analysis: outcome.result,
        })
        .await?;

    tracing::info!(
        scan_id = scan.id,
        provider = %outcome.provider,
        risk_score = scan.risk_score,
        risk_level = %scan.risk_level,
        "scan created"
    );
    Ok(scan)
}

/// Scans owned by `user_id`, newest first.
///
/// # Errors
///
/// Returns a database error.
pub async fn list_scans(state: &AppState, user_id: &str) -> Result<Vec<Scan>, ServiceError> {
    Ok(state.store.list_scans_for_user(user_id).await?)
}

/// Fetch a scan by its path id and check ownership.
///
/// A non-numeric id is reported as not found.
///
/// # Errors
///
/// `NotFound` when no such scan exists, `Unauthorized` when it belongs to
/// another user.
pub async fn get_scan(state: &AppState, raw_id: &str, user_id: &str) -> Result<Scan, ServiceError> {
    let id = parse_scan_id(raw_id)?;
    let scan = match state.store.get_scan(id).await {
        Ok(scan) => scan,
        Err(e) if e.is_not_found() => return Err(CoreError::not_found("Scan", id).into()),
        Err(e) => return Err(e.into()),
    };

    if !scan.is_owned_by(user_id) {
        tracing::debug!(scan_id = id, "scan requested by non-owner");
        return Err(CoreError::Unauthorized.into());
    }
    Ok(scan)
}

/// Dashboard counters for `user_id`.
///
/// # Errors
///
/// Returns a database error.
pub async fn stats(state: &AppState, user_id: &str) -> Result<ScanStats, ServiceError> {
    Ok(state.store.scan_stats(user_id).await?)
}

fn parse_scan_id(raw: &str) -> Result<i64, CoreError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CoreError::not_found("Scan", raw))
}
