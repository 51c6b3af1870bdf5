//! # shield-analysis
//!
//! Fraud-risk analysis for JobShield.
//!
//! Remote providers speak the OpenAI-compatible chat-completions protocol:
//! - Groq (tried first, when a `gsk_` key is configured)
//! - OpenAI (tried second, when a real key is configured)
//!
//! [`AnalyzerChain`] tries them in order and ends with the deterministic
//! [`LocalAnalyzer`], so analysis always produces a result. Provider payloads
//! are normalized into [`shield_core::analysis::AnalysisResult`] before they
//! leave this crate.

mod chain;
mod chat;
mod error;
mod http;
mod local;
pub mod prompt;
mod provider;

pub use chain::{AnalysisOutcome, AnalyzerChain};
pub use chat::ChatCompletionsProvider;
pub use error::AnalysisError;
pub use local::LocalAnalyzer;
pub use provider::AnalysisProvider;
