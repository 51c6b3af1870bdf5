//! HTTP routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use shield_core::entities::{Report, Scan, User};
use shield_core::responses::{ReportCreatedResponse, ScanStats};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::auth::CurrentUser;
use crate::error::ServiceError;
use crate::state::AppState;
use crate::{pipeline, reports};

/// Build the application router: the JSON API under `/api` plus the
/// generated reports served as static files.
pub fn router(state: AppState) -> Router {
    let prefix = state.reports.url_prefix().to_string();
    let files = ServeDir::new(state.reports.dir());

    let api = Router::new()
        .route("/api/scans", post(create_scan).get(list_scans))
        .route("/api/scans/:id", get(get_scan))
        .route("/api/scans/:id/report", post(generate_report))
        .route("/api/scans/:id/reports", get(list_reports))
        .route("/api/stats", get(stats))
        .route("/api/auth/user", get(current_user));

    let app = if prefix == "/" {
        api.fallback_service(files)
    } else {
        api.nest_service(&prefix, files)
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn create_scan(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Scan>), ServiceError> {
    let Json(body) = body.map_err(|rejection| ServiceError::Validation {
        field: "body".into(),
        message: rejection.body_text(),
    })?;
    let scan = pipeline::create_scan(&state, &user, &body).await?;
    Ok((StatusCode::CREATED, Json(scan)))
}

async fn list_scans(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Scan>>, ServiceError> {
    Ok(Json(pipeline::list_scans(&state, &user.id).await?))
}

async fn get_scan(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Scan>, ServiceError> {
    Ok(Json(pipeline::get_scan(&state, &id, &user.id).await?))
}

async fn generate_report(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ReportCreatedResponse>), ServiceError> {
    let created = reports::generate_report(&state, &id, &user.id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_reports(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Report>>, ServiceError> {
    Ok(Json(reports::list_reports(&state, &id, &user.id).await?))
}

async fn stats(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ScanStats>, ServiceError> {
    Ok(Json(pipeline::stats(&state, &user.id).await?))
}

async fn current_user(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}
