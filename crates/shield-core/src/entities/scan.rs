use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::enums::{InputType, RiskLevel};

/// One submitted fraud investigation and its outcome. Never updated after insert.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Scan {
    pub id: i64,
    pub user_id: String,
    pub content: String,
    pub input_type: InputType,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub analysis_result: AnalysisResult,
    pub created_at: DateTime<Utc>,
}

impl Scan {
    /// Whether `user_id` owns this scan.
    #[must_use]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Insert payload for a scan. Score and level are taken from the analysis,
/// so they cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScan {
    pub user_id: String,
    pub content: String,
    pub input_type: InputType,
    pub analysis: AnalysisResult,
}
