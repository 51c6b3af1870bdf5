//! Fallback behaviour of the provider chain, driven by test-double providers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use shield_analysis::{AnalysisError, AnalysisProvider, AnalyzerChain};
use shield_core::enums::{InputType, RiskLevel};

struct Failing {
    name: &'static str,
    calls: AtomicUsize,
}

impl Failing {
    fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl AnalysisProvider for Failing {
    fn name(&self) -> &str {
        self.name
    }

    async fn analyze(&self, _content: &str, _input_type: InputType) -> Result<Value, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AnalysisError::Api {
            status: 503,
            message: "upstream unavailable".into(),
        })
    }
}

struct Fixed {
    name: &'static str,
    payload: Value,
    calls: AtomicUsize,
}

impl Fixed {
    fn new(name: &'static str, payload: Value) -> Arc<Self> {
        Arc::new(Self {
            name,
            payload,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl AnalysisProvider for Fixed {
    fn name(&self) -> &str {
        self.name
    }

    async fn analyze(&self, _content: &str, _input_type: InputType) -> Result<Value, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }
}

const SCAM: &str = "URGENT: Wire transfer of $150,000 required, no experience needed for high pay, \
                    contact us at job@gmail.com";

#[tokio::test]
async fn first_success_wins() {
    let a = Fixed::new("a", json!({"risk_score": 12, "summary": "fine"}));
    let b = Fixed::new("b", json!({"risk_score": 99}));
    let chain = AnalyzerChain::new(vec![a.clone(), b.clone()]);

    let outcome = chain.analyze("hello", InputType::Text).await;
    assert_eq!(outcome.provider, "a");
    assert_eq!(outcome.result.risk_score, 12);
    assert_eq!(outcome.result.summary, "fine");
    assert_eq!(b.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failing_primary_falls_through_to_secondary() {
    let a = Failing::new("a");
    let b = Fixed::new("b", json!({"risk_score": 55, "risk_level": "low"}));
    let chain = AnalyzerChain::new(vec![a.clone(), b.clone()]);

    let outcome = chain.analyze("hello", InputType::Email).await;
    assert_eq!(a.calls.load(Ordering::SeqCst), 1);
    assert_eq!(outcome.provider, "b");
    assert_eq!(outcome.result.risk_level, RiskLevel::High);
}

#[tokio::test]
async fn all_remote_failures_end_in_local_analysis() {
    let a = Failing::new("a");
    let b = Failing::new("b");
    let chain = AnalyzerChain::new(vec![a.clone(), b.clone()]);

    let outcome = chain.analyze(SCAM, InputType::Email).await;
    assert_eq!(outcome.provider, "local");
    assert_eq!(outcome.result.risk_score, 100);
    assert_eq!(outcome.result.risk_level, RiskLevel::Critical);
    assert_eq!(outcome.result.flags.len(), 5);
    assert_eq!(a.calls.load(Ordering::SeqCst), 1);
    assert_eq!(b.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn local_only_chain_is_deterministic() {
    let chain = AnalyzerChain::local_only();
    let first = chain.analyze(SCAM, InputType::Chat).await;
    let second = chain.analyze(SCAM, InputType::Chat).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn remote_payload_is_normalized_to_snake_case_contract() {
    let chain = AnalyzerChain::new(vec![Fixed::new(
        "camel",
        json!({
            "riskScore": 90,
            "risk_score": "64.7",
            "flags": "Gmail domain",
            "suspiciousPhrases": [{"text": "ignored"}]
        }),
    )]);

    let outcome = chain.analyze("hello", InputType::Text).await;
    assert_eq!(outcome.result.risk_score, 65);
    assert_eq!(outcome.result.risk_level, RiskLevel::High);
    assert_eq!(outcome.result.flags, vec!["Gmail domain"]);
    assert!(outcome.result.suspicious_phrases.is_empty());
}

struct Throttled {
    calls: AtomicUsize,
}

#[async_trait]
impl AnalysisProvider for Throttled {
    fn name(&self) -> &str {
        "throttled"
    }

    async fn analyze(&self, _content: &str, _input_type: InputType) -> Result<Value, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AnalysisError::RateLimited {
            retry_after_secs: 1,
        })
    }
}

#[tokio::test]
async fn rate_limited_provider_is_not_retried() {
    let throttled = Arc::new(Throttled {
        calls: AtomicUsize::new(0),
    });
    let chain = AnalyzerChain::new(vec![throttled.clone()]);

    let outcome = chain.analyze("gift card only", InputType::Text).await;
    assert_eq!(outcome.provider, "local");
    assert_eq!(outcome.result.risk_score, 30);
    assert_eq!(throttled.calls.load(Ordering::SeqCst), 1);
}
