//! # shield-core
//!
//! Core types, analysis contract, and error types for JobShield.
//!
//! This crate provides the foundational types shared across all JobShield crates:
//! - Entity structs for persisted records (scans, reports, users)
//! - Input category and risk level enums with the score bucketing policy
//! - The canonical `AnalysisResult` shape and its normalization step
//! - Cross-cutting error types
//! - API response types

pub mod analysis;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod responses;
