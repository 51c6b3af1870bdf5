use async_trait::async_trait;
use serde_json::Value;
use shield_core::enums::InputType;

use crate::error::AnalysisError;

/// A remote analysis strategy. Implementations return the provider's raw JSON
/// object; [`crate::AnalyzerChain`] normalizes it before anything else sees it.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Short name used in logs, e.g. `"groq"`.
    fn name(&self) -> &str;

    /// Run one analysis attempt. No retries.
    async fn analyze(&self, content: &str, input_type: InputType) -> Result<Value, AnalysisError>;
}
