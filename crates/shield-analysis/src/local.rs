//! Deterministic keyword analyzer.
//!
//! The terminal entry of the fallback chain: a pure function over the
//! lower-cased content that cannot fail. Each matching rule adds a fixed
//! weight to the score and a flag; the total is clamped to `0..=100`.

use std::sync::LazyLock;

use regex::Regex;
use shield_core::analysis::{
    AnalysisResult, CompanyVerification, SalaryAnalysis, SuspiciousPhrase, clamp_score,
};
use shield_core::enums::{InputType, RiskLevel};

/// First dollar amount in the content, e.g. `$150,000`.
static DOLLAR_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[\d,]+").expect("dollar pattern should compile"));

/// Amounts strictly above this count as an unrealistic salary.
const SALARY_CEILING: u64 = 100_000;

/// Scores at or above this mark the salary as implausible.
const IMPLAUSIBLE_SALARY_SCORE: i64 = 50;

struct Rule {
    weight: i64,
    flag: &'static str,
    phrase: Option<Phrase>,
    matches: fn(&str) -> bool,
}

struct Phrase {
    text: &'static str,
    reason: &'static str,
    category: &'static str,
}

const RULES: [Rule; 6] = [
    Rule {
        weight: 20,
        flag: "Urgency Pressure",
        phrase: Some(Phrase {
            text: "Urgent action required",
            reason: "Creates false sense of urgency",
            category: "Pressure Tactics",
        }),
        matches: mentions_urgency,
    },
    Rule {
        weight: 30,
        flag: "Suspicious Payment Method",
        phrase: Some(Phrase {
            text: "Unusual payment method requested",
            reason: "Legitimate employers rarely request wire transfers or cryptocurrency",
            category: "Payment Red Flag",
        }),
        matches: mentions_payment_method,
    },
    Rule {
        weight: 25,
        flag: "Unrealistic Salary",
        phrase: None,
        matches: has_unrealistic_amount,
    },
    Rule {
        weight: 15,
        flag: "Non-Corporate Email Domain",
        phrase: Some(Phrase {
            text: "Using free email service",
            reason: "Legitimate companies typically use corporate email domains",
            category: "Email Verification",
        }),
        matches: mentions_free_email,
    },
    Rule {
        weight: 20,
        flag: "Too Good To Be True",
        phrase: None,
        matches: promises_easy_pay,
    },
    Rule {
        weight: 15,
        flag: "Work From Home Scam Indicators",
        phrase: None,
        matches: promises_easy_remote_money,
    },
];

fn mentions_urgency(c: &str) -> bool {
    c.contains("urgent") || c.contains("act now")
}

fn mentions_payment_method(c: &str) -> bool {
    ["wire transfer", "bitcoin", "gift card"]
        .iter()
        .any(|needle| c.contains(needle))
}

fn mentions_free_email(c: &str) -> bool {
    ["@gmail.com", "@yahoo.com", "@hotmail.com"]
        .iter()
        .any(|needle| c.contains(needle))
}

fn promises_easy_pay(c: &str) -> bool {
    c.contains("no experience") && c.contains("high pay")
}

fn promises_easy_remote_money(c: &str) -> bool {
    c.contains("work from home") && c.contains("easy money")
}

/// Whether the first `$` amount in the content exceeds the salary ceiling.
/// Amounts too large for `u64` count as exceeding it.
fn has_unrealistic_amount(content: &str) -> bool {
    let Some(m) = DOLLAR_AMOUNT.find(content) else {
        return false;
    };
    let digits: String = m.as_str().chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return false;
    }
    digits.parse::<u64>().map_or(true, |amount| amount > SALARY_CEILING)
}

/// Keyword analyzer used when no remote provider is configured or all of them failed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAnalyzer;

impl LocalAnalyzer {
    pub const NAME: &'static str = "local";

    /// Analyze `content`. Infallible; `input_type` does not affect the rules.
    #[must_use]
    pub fn analyze(&self, content: &str, _input_type: InputType) -> AnalysisResult {
        let lower = content.to_lowercase();

        let mut raw_score = 0i64;
        let mut flags = Vec::new();
        let mut suspicious_phrases = Vec::new();

        for rule in RULES.iter().filter(|rule| (rule.matches)(&lower)) {
            raw_score += rule.weight;
            flags.push(rule.flag.to_string());
            if let Some(phrase) = &rule.phrase {
                suspicious_phrases.push(SuspiciousPhrase {
                    text: phrase.text.to_string(),
                    reason: phrase.reason.to_string(),
                    category: phrase.category.to_string(),
                });
            }
        }

        let risk_score = clamp_score(raw_score);
        let risk_level = RiskLevel::from_score(risk_score);
        let plausible = raw_score < IMPLAUSIBLE_SALARY_SCORE;

        AnalysisResult {
            risk_score,
            risk_level,
            flags,
            suspicious_phrases,
            company_verification: CompanyVerification {
                found: false,
                name: Some("Unknown".to_string()),
                trust_score: Some(0),
                details: Some(
                    "Local analysis - company verification requires a remote analysis provider"
                        .to_string(),
                ),
            },
            salary_analysis: SalaryAnalysis {
                plausible,
                deviation: None,
                reason: Some(
                    if plausible {
                        "Compensation appears reasonable"
                    } else {
                        "Compensation appears unusually high for stated requirements"
                    }
                    .to_string(),
                ),
            },
            summary: risk_level.default_summary().to_string(),
        }
    }
}
