use chrono::Utc;
use shield_core::analysis::{AnalysisResult, SuspiciousPhrase};
use shield_core::entities::Scan;
use shield_core::enums::InputType;
use shield_report::render_report;

fn scan(analysis: AnalysisResult) -> Scan {
    Scan {
        id: 42,
        user_id: "user_1".into(),
        content: "URGENT: wire transfer needed".into(),
        input_type: InputType::Email,
        risk_score: analysis.risk_score,
        risk_level: analysis.risk_level,
        analysis_result: analysis,
        created_at: Utc::now(),
    }
}

#[test]
fn renders_a_pdf_document() {
    let analysis = AnalysisResult::normalize(&serde_json::json!({
        "risk_score": 85,
        "flags": ["Urgency Pressure", "Suspicious Payment Method"],
        "suspicious_phrases": [
            {"text": "wire transfer needed", "reason": "Payment up front", "category": "Payment Red Flag"}
        ],
        "company_verification": {"found": false, "name": "Unknown", "trust_score": 0},
        "salary_analysis": {"plausible": false, "reason": "Compensation appears unusually high"},
        "summary": "CRITICAL RISK: do not proceed."
    }));

    let report = render_report(&scan(analysis), Utc::now()).unwrap();
    assert!(report.bytes.starts_with(b"%PDF-"));
    assert_eq!(report.pages, 1);
}

#[test]
fn non_ascii_content_renders() {
    let analysis = AnalysisResult {
        summary: "\u{201C}R\u{00E9}mun\u{00E9}ration\u{201D} \u{2014} 5\u{202F}000\u{00A0}\u{20AC} \u{1F4B0}".into(),
        flags: vec!["\u{65E5}\u{672C}\u{8A9E}".into()],
        ..AnalysisResult::default()
    };
    let report = render_report(&scan(analysis), Utc::now()).unwrap();
    assert!(report.bytes.starts_with(b"%PDF-"));
}

#[test]
fn long_reports_have_multiple_pages() {
    let analysis = AnalysisResult {
        suspicious_phrases: (0..80)
            .map(|i| SuspiciousPhrase {
                text: format!("phrase {i}"),
                reason: "Legitimate employers rarely request wire transfers or cryptocurrency".into(),
                category: "Payment Red Flag".into(),
            })
            .collect(),
        ..AnalysisResult::default()
    };
    let report = render_report(&scan(analysis), Utc::now()).unwrap();
    assert!(report.pages > 1);
    assert!(report.bytes.starts_with(b"%PDF-"));
}
