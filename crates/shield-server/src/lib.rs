//! # shield-server
//!
//! HTTP surface and scan pipeline for JobShield.
//!
//! The axum [`router`] exposes scan submission, retrieval, report generation
//! and dashboard stats under `/api`, and serves generated PDFs as static
//! files. Handlers are thin: validation, analysis and persistence live in
//! [`pipeline`], document generation in [`reports`]. Every shared handle is
//! built once in [`AppState`] and injected.

pub mod auth;
pub mod cli;
pub mod commands;
pub mod config_warnings;
pub mod error;
pub mod pipeline;
pub mod reports;
pub mod routes;
pub mod state;

pub use error::ServiceError;
pub use routes::router;
pub use state::AppState;
