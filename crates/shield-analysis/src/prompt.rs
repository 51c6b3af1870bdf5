//! Prompt shared by every remote provider.

use shield_core::enums::InputType;

/// System prompt requesting strict JSON in the canonical analysis shape.
pub const SYSTEM_PROMPT: &str = "\
You are an expert Recruitment Fraud Detection Analyst.
Analyze the provided content (email, chat, job description) for scam indicators.

Return a JSON object with exactly these fields:
- risk_score (0-100 integer)
- risk_level (\"low\", \"moderate\", \"high\", \"critical\")
- flags (array of strings, e.g. \"Unrealistic Salary\", \"Gmail domain\")
- suspicious_phrases (array of objects {text, reason, category})
- company_verification (object {found: boolean, name: string, trust_score: number, details: string})
- salary_analysis (object {plausible: boolean, reason: string})
- summary (string)

If company verification is needed, assume \"Not Verified\" unless it is a very well known company like Google, Microsoft, etc.";

/// User message carrying the input category and the raw content.
#[must_use]
pub fn user_prompt(input_type: InputType, content: &str) -> String {
    format!("Input Type: {input_type}\nContent:\n{content}")
}
