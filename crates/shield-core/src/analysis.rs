//! The canonical fraud-analysis contract and its normalization step.
//!
//! Providers (remote LLMs or the local keyword analyzer) hand back loosely
//! shaped JSON. [`AnalysisResult::normalize`] is the one place where that
//! payload is parsed leniently and default-filled; everything downstream
//! (persistence, rendering, API responses) works with the typed result.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::RiskLevel;

/// Maximum risk score.
pub const MAX_RISK_SCORE: u8 = 100;

/// A phrase in the submitted content that the analysis considers suspicious.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SuspiciousPhrase {
    pub text: String,
    pub reason: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyVerification {
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SalaryAnalysis {
    pub plausible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Structured outcome of one fraud analysis.
///
/// Field names are `snake_case` on the wire and in storage, regardless of
/// which provider produced the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub suspicious_phrases: Vec<SuspiciousPhrase>,
    #[serde(default)]
    pub company_verification: CompanyVerification,
    #[serde(default)]
    pub salary_analysis: SalaryAnalysis,
    #[serde(default)]
    pub summary: String,
}

impl AnalysisResult {
    /// Parse an untrusted provider payload into the canonical shape.
    ///
    /// Never fails: missing or mistyped fields fall back to defaults. The
    /// score is rounded and clamped into `0..=100`; when the score is absent
    /// but a recognizable `risk_level` is present, the level's floor score is
    /// used instead. `risk_level` is always recomputed from the final score.
    #[must_use]
    pub fn normalize(raw: &Value) -> Self {
        let score = raw
            .get("risk_score")
            .and_then(parse_score)
            .or_else(|| {
                raw.get("risk_level")
                    .and_then(Value::as_str)
                    .and_then(|s| RiskLevel::parse(&s.trim().to_ascii_lowercase()))
                    .map(RiskLevel::floor_score)
            })
            .unwrap_or(0);

        Self {
            risk_score: score,
            risk_level: RiskLevel::from_score(score),
            flags: raw.get("flags").map(string_list).unwrap_or_default(),
            suspicious_phrases: raw
                .get("suspicious_phrases")
                .map(phrase_list)
                .unwrap_or_default(),
            company_verification: raw
                .get("company_verification")
                .map(company_verification)
                .unwrap_or_default(),
            salary_analysis: raw
                .get("salary_analysis")
                .map(salary_analysis)
                .unwrap_or_default(),
            summary: raw
                .get("summary")
                .and_then(Value::as_str)
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Restore a persisted result. Stored JSON was written by [`Self::normalize`],
    /// but is read through the same lenient path in case it was edited externally.
    #[must_use]
    pub fn from_stored(raw: &Value) -> Self {
        Self::normalize(raw)
    }

    /// Summary text, falling back to the fixed text for the risk level.
    #[must_use]
    pub fn summary_or_default(&self) -> &str {
        if self.summary.is_empty() {
            self.risk_level.default_summary()
        } else {
            &self.summary
        }
    }
}

/// Clamp an arbitrary integer score into `0..=100`.
#[must_use]
pub fn clamp_score(raw: i64) -> u8 {
    u8::try_from(raw.clamp(0, i64::from(MAX_RISK_SCORE))).unwrap_or(MAX_RISK_SCORE)
}

#[allow(clippy::cast_possible_truncation)]
fn parse_score(v: &Value) -> Option<u8> {
    let n = match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64))?,
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.round() as i64))?
        }
        _ => return None,
    };
    Some(clamp_score(n))
}

fn string_list(v: &Value) -> Vec<String> {
    match v {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Object(_) => item
                    .get("text")
                    .or_else(|| item.get("name"))
                    .and_then(Value::as_str)
                    .map(|s| s.trim().to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

fn opt_str(v: &Value, key: &str) -> Option<String> {
    match v.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn phrase_list(v: &Value) -> Vec<SuspiciousPhrase> {
    let Value::Array(items) = v else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) if !s.trim().is_empty() => Some(SuspiciousPhrase {
                text: s.trim().to_string(),
                ..SuspiciousPhrase::default()
            }),
            Value::Object(_) => {
                let text = opt_str(item, "text")?;
                Some(SuspiciousPhrase {
                    text,
                    reason: opt_str(item, "reason").unwrap_or_default(),
                    category: opt_str(item, "category").unwrap_or_default(),
                })
            }
            _ => None,
        })
        .collect()
}

fn as_bool(v: Option<&Value>) -> bool {
    match v {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn company_verification(v: &Value) -> CompanyVerification {
    CompanyVerification {
        found: as_bool(v.get("found")),
        name: opt_str(v, "name"),
        trust_score: v.get("trust_score").and_then(parse_score),
        details: match v.get("details") {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Some(other @ (Value::Object(_) | Value::Array(_))) => Some(other.to_string()),
            _ => None,
        },
    }
}

fn salary_analysis(v: &Value) -> SalaryAnalysis {
    SalaryAnalysis {
        plausible: as_bool(v.get("plausible")),
        deviation: opt_str(v, "deviation"),
        reason: opt_str(v, "reason"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_object_gets_defaults() {
        let result = AnalysisResult::normalize(&json!({}));
        assert_eq!(result, AnalysisResult::default());
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.risk_score, 0);
    }

    #[test]
    fn non_object_payload_gets_defaults() {
        assert_eq!(
            AnalysisResult::normalize(&json!("not an analysis")),
            AnalysisResult::default()
        );
        assert_eq!(AnalysisResult::normalize(&Value::Null), AnalysisResult::default());
    }

    #[test]
    fn level_is_recomputed_from_score() {
        let result = AnalysisResult::normalize(&json!({
            "risk_score": 82,
            "risk_level": "low",
        }));
        assert_eq!(result.risk_score, 82);
        assert_eq!(result.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn level_without_score_uses_floor() {
        let result = AnalysisResult::normalize(&json!({ "risk_level": "High" }));
        assert_eq!(result.risk_score, 50);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn unknown_level_without_score_is_low() {
        let result = AnalysisResult::normalize(&json!({ "risk_level": "extreme" }));
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn score_accepts_floats_and_strings() {
        assert_eq!(AnalysisResult::normalize(&json!({"risk_score": 64.6})).risk_score, 65);
        assert_eq!(AnalysisResult::normalize(&json!({"risk_score": "45"})).risk_score, 45);
        assert_eq!(AnalysisResult::normalize(&json!({"risk_score": "71.2"})).risk_score, 71);
        assert_eq!(AnalysisResult::normalize(&json!({"risk_score": true})).risk_score, 0);
    }

    #[test]
    fn score_is_clamped() {
        assert_eq!(AnalysisResult::normalize(&json!({"risk_score": 250})).risk_score, 100);
        assert_eq!(AnalysisResult::normalize(&json!({"risk_score": -12})).risk_score, 0);
    }

    #[test]
    fn full_payload_is_preserved() {
        let raw = json!({
            "risk_score": 55,
            "risk_level": "high",
            "flags": ["Gmail domain", "", 7, "Unrealistic Salary"],
            "suspicious_phrases": [
                {"text": "send a gift card", "reason": "payment", "category": "Payment Red Flag"},
                {"reason": "missing text is dropped"},
                "act now"
            ],
            "company_verification": {"found": true, "name": "Acme", "trust_score": 80, "details": "Known employer"},
            "salary_analysis": {"plausible": false, "reason": "Too high"},
            "summary": "  Looks risky.  "
        });
        let result = AnalysisResult::normalize(&raw);

        assert_eq!(result.flags, vec!["Gmail domain", "Unrealistic Salary"]);
        assert_eq!(result.suspicious_phrases.len(), 2);
        assert_eq!(result.suspicious_phrases[0].category, "Payment Red Flag");
        assert_eq!(result.suspicious_phrases[1].text, "act now");
        assert_eq!(result.suspicious_phrases[1].reason, "");
        assert_eq!(
            result.company_verification,
            CompanyVerification {
                found: true,
                name: Some("Acme".into()),
                trust_score: Some(80),
                details: Some("Known employer".into()),
            }
        );
        assert!(!result.salary_analysis.plausible);
        assert_eq!(result.salary_analysis.reason.as_deref(), Some("Too high"));
        assert_eq!(result.summary, "Looks risky.");
    }

    #[test]
    fn structured_company_details_are_stringified() {
        let result = AnalysisResult::normalize(&json!({
            "company_verification": {"found": "true", "details": {"registry": "none"}}
        }));
        assert!(result.company_verification.found);
        assert_eq!(
            result.company_verification.details.as_deref(),
            Some(r#"{"registry":"none"}"#)
        );
    }

    #[test]
    fn normalized_output_is_a_fixed_point() {
        let raw = json!({
            "risk_score": 35,
            "flags": ["Urgency Pressure"],
            "summary": "Check it."
        });
        let once = AnalysisResult::normalize(&raw);
        let twice = AnalysisResult::normalize(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn summary_falls_back_to_level_text() {
        let result = AnalysisResult::normalize(&json!({"risk_score": 90}));
        assert!(result.summary_or_default().starts_with("CRITICAL RISK"));
    }
}
