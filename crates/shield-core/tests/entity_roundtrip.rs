//! Serde roundtrip and JsonSchema validation tests for the API contract types.

use chrono::Utc;
use schemars::schema_for;
use shield_core::analysis::*;
use shield_core::entities::*;
use shield_core::enums::*;
use shield_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_analysis() -> AnalysisResult {
    AnalysisResult {
        risk_score: 75,
        risk_level: RiskLevel::Critical,
        flags: vec!["Urgency Pressure".into(), "Suspicious Payment Method".into()],
        suspicious_phrases: vec![SuspiciousPhrase {
            text: "Urgent action required".into(),
            reason: "Creates false sense of urgency".into(),
            category: "Pressure Tactics".into(),
        }],
        company_verification: CompanyVerification {
            found: false,
            name: Some("Unknown".into()),
            trust_score: Some(0),
            details: None,
        },
        salary_analysis: SalaryAnalysis {
            plausible: false,
            deviation: None,
            reason: Some("Compensation appears unusually high".into()),
        },
        summary: "CRITICAL RISK".into(),
    }
}

roundtrip_and_validate!(analysis_roundtrip, AnalysisResult, sample_analysis());

roundtrip_and_validate!(
    scan_roundtrip,
    Scan,
    Scan {
        id: 42,
        user_id: "user_2abc".into(),
        content: "URGENT: wire transfer needed".into(),
        input_type: InputType::Email,
        risk_score: 75,
        risk_level: RiskLevel::Critical,
        analysis_result: sample_analysis(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    report_roundtrip,
    Report,
    Report {
        id: 7,
        scan_id: 42,
        pdf_url: "/reports/report-42-1718000000000.pdf".into(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    user_roundtrip,
    User,
    User {
        id: "user_2abc".into(),
        email: Some("jane@example.com".into()),
        display_name: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    stats_roundtrip,
    ScanStats,
    ScanStats {
        total_scans: 12,
        high_risk: 3,
        verified_safe: 8,
    }
);

roundtrip_and_validate!(
    error_roundtrip,
    ErrorResponse,
    ErrorResponse {
        message: "Content is required".into(),
        field: Some("content".into()),
    }
);

#[test]
fn scan_uses_camel_case_keys_and_snake_case_analysis() {
    let scan = Scan {
        id: 1,
        user_id: "user_1".into(),
        content: "hello".into(),
        input_type: InputType::JobDesc,
        risk_score: 0,
        risk_level: RiskLevel::Low,
        analysis_result: AnalysisResult::default(),
        created_at: Utc::now(),
    };
    let value = serde_json::to_value(&scan).unwrap();
    for key in [
        "id",
        "userId",
        "content",
        "inputType",
        "riskScore",
        "riskLevel",
        "analysisResult",
        "createdAt",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["inputType"], "job_desc");
    assert!(value["analysisResult"].get("risk_score").is_some());
    assert!(value["analysisResult"].get("suspicious_phrases").is_some());
}
