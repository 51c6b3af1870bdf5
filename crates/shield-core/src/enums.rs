//! Input category and risk level enums for JobShield.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `RiskLevel::from_score` is the single bucketing policy applied to every
//! risk score, whatever produced it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// InputType
// ---------------------------------------------------------------------------

/// Category of the submitted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    /// Plain text pasted by the user.
    Text,
    Email,
    /// Chat log (WhatsApp, Telegram, LinkedIn messages, ...).
    Chat,
    /// Job posting or job description.
    JobDesc,
}

impl InputType {
    pub const ALL: [Self; 4] = [Self::Text, Self::Email, Self::Chat, Self::JobDesc];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Chat => "chat",
            Self::JobDesc => "job_desc",
        }
    }

    /// Parse the wire/storage representation. Returns `None` for unknown values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Ordinal bucketing of a 0–100 risk score.
///
/// ```text
/// [0, 30)   → low
/// [30, 50)  → moderate
/// [50, 70)  → high
/// [70, 100] → critical
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [Self; 4] = [Self::Low, Self::Moderate, Self::High, Self::Critical];

    /// Bucket a risk score. Scores above 100 are treated as critical.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            70.. => Self::Critical,
            50..=69 => Self::High,
            30..=49 => Self::Moderate,
            _ => Self::Low,
        }
    }

    /// Lowest score that still maps to this level.
    #[must_use]
    pub const fn floor_score(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Moderate => 30,
            Self::High => 50,
            Self::Critical => 70,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == s)
    }

    /// Fixed executive summary for this level, used when no provider summary exists.
    #[must_use]
    pub const fn default_summary(self) -> &'static str {
        match self {
            Self::Critical => {
                "CRITICAL RISK: Multiple severe red flags detected. This appears to be a scam. Do not proceed."
            }
            Self::High => {
                "HIGH RISK: Several concerning indicators found. Exercise extreme caution and verify independently."
            }
            Self::Moderate => {
                "MODERATE RISK: Some suspicious elements detected. Recommend additional verification before proceeding."
            }
            Self::Low => {
                "LOW RISK: No major red flags detected, but always verify job offers through official channels."
            }
        }
    }

    /// Whether this level counts toward the dashboard's high-risk counter.
    #[must_use]
    pub const fn is_high_risk(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
