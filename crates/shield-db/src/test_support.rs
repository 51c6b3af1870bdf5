//! Shared test utilities for shield-db unit tests.

use shield_core::analysis::AnalysisResult;
use shield_core::entities::{NewScan, NewUser, Scan};
use shield_core::enums::InputType;

use crate::{IN_MEMORY, ShieldStore};

/// Create an in-memory store.
pub async fn test_store() -> ShieldStore {
    ShieldStore::new_local(IN_MEMORY).await.unwrap()
}

/// Insert a user with the given ID and no profile fields.
pub async fn seed_user(store: &ShieldStore, id: &str) {
    store
        .create_user(&NewUser {
            id: id.to_string(),
            email: None,
            display_name: None,
        })
        .await
        .unwrap();
}

/// Insert a scan whose analysis carries only the given score.
pub async fn seed_scan(store: &ShieldStore, user_id: &str, score: i64) -> Scan {
    store
        .create_scan(&NewScan {
            user_id: user_id.to_string(),
            content: format!("content scored {score}"),
            input_type: InputType::Text,
            analysis: AnalysisResult::normalize(&serde_json::json!({ "risk_score": score })),
        })
        .await
        .unwrap()
}
