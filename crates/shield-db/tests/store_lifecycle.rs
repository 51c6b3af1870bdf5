//! File-backed store tests: data written through one handle is visible after reopen.

use pretty_assertions::assert_eq;
use shield_core::analysis::AnalysisResult;
use shield_core::entities::{NewScan, NewUser};
use shield_core::enums::{InputType, RiskLevel};
use shield_db::ShieldStore;

#[tokio::test]
async fn scans_and_reports_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("jobshield.db");
    let path = path.to_str().unwrap().to_string();

    let (scan_id, report_url) = {
        let store = ShieldStore::new_local(&path).await.unwrap();
        store
            .upsert_user(&NewUser {
                id: "user_1".into(),
                email: Some("jane@example.com".into()),
                display_name: None,
            })
            .await
            .unwrap();
        let scan = store
            .create_scan(&NewScan {
                user_id: "user_1".into(),
                content: "Send a gift card to start".into(),
                input_type: InputType::Email,
                analysis: AnalysisResult::normalize(&serde_json::json!({
                    "risk_score": 30,
                    "flags": ["Suspicious Payment Method"]
                })),
            })
            .await
            .unwrap();
        let report = store
            .create_report(scan.id, "/reports/report-1-1.pdf")
            .await
            .unwrap();
        (scan.id, report.pdf_url)
    };

    let store = ShieldStore::new_local(&path).await.unwrap();
    let scan = store.get_scan(scan_id).await.unwrap();
    assert_eq!(scan.risk_level, RiskLevel::Moderate);
    assert_eq!(scan.analysis_result.flags, vec!["Suspicious Payment Method"]);

    let reports = store.list_reports_for_scan(scan_id).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].pdf_url, report_url);

    let user = store.get_user_by_email("jane@example.com").await.unwrap();
    assert_eq!(user.map(|u| u.id).as_deref(), Some("user_1"));
}

#[tokio::test]
async fn hand_edited_analysis_is_read_leniently() {
    let store = ShieldStore::new_local(":memory:").await.unwrap();
    store
        .upsert_user(&NewUser {
            id: "user_1".into(),
            email: None,
            display_name: None,
        })
        .await
        .unwrap();
    let scan = store
        .create_scan(&NewScan {
            user_id: "user_1".into(),
            content: "hello".into(),
            input_type: InputType::Text,
            analysis: AnalysisResult::default(),
        })
        .await
        .unwrap();

    store
        .db()
        .conn()
        .execute(
            "UPDATE scans SET analysis_result = '{\"riskScore\": 99, \"flags\": \"one\"}' WHERE id = ?1",
            libsql::params![scan.id],
        )
        .await
        .unwrap();

    let reread = store.get_scan(scan.id).await.unwrap();
    assert_eq!(reread.analysis_result.risk_score, 0);
    assert_eq!(reread.analysis_result.flags, vec!["one"]);
}
