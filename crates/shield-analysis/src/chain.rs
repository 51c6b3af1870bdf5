//! Ordered provider fallback.

use std::sync::Arc;

use shield_config::ShieldConfig;
use shield_core::analysis::AnalysisResult;
use shield_core::enums::InputType;

use crate::chat::ChatCompletionsProvider;
use crate::local::LocalAnalyzer;
use crate::provider::AnalysisProvider;

/// A normalized result and the name of the provider that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub provider: String,
    pub result: AnalysisResult,
}

/// Tries each remote provider in order and ends with the local analyzer.
///
/// [`AnalyzerChain::analyze`] never fails: a remote error is logged and the
/// next entry is tried. Every remote payload is normalized before it is
/// returned.
pub struct AnalyzerChain {
    remotes: Vec<Arc<dyn AnalysisProvider>>,
    local: LocalAnalyzer,
}

impl AnalyzerChain {
    #[must_use]
    pub fn new(remotes: Vec<Arc<dyn AnalysisProvider>>) -> Self {
        Self {
            remotes,
            local: LocalAnalyzer,
        }
    }

    /// Chain with no remote providers.
    #[must_use]
    pub fn local_only() -> Self {
        Self::new(Vec::new())
    }

    /// Build the chain from configuration: Groq first, then OpenAI, each only
    /// when its key is well-formed.
    #[must_use]
    pub fn from_config(config: &ShieldConfig) -> Self {
        let mut remotes: Vec<Arc<dyn AnalysisProvider>> = Vec::new();

        if config.groq.is_configured() {
            match ChatCompletionsProvider::groq(&config.groq) {
                Ok(provider) => remotes.push(Arc::new(provider)),
                Err(e) => tracing::warn!(%e, "groq provider disabled"),
            }
        }
        if config.openai.is_configured() {
            match ChatCompletionsProvider::openai(&config.openai) {
                Ok(provider) => remotes.push(Arc::new(provider)),
                Err(e) => tracing::warn!(%e, "openai provider disabled"),
            }
        }

        Self::new(remotes)
    }

    /// Names of the providers in the order they are tried, local last.
    #[must_use]
    pub fn provider_names(&self) -> Vec<&str> {
        self.remotes
            .iter()
            .map(|p| p.name())
            .chain(std::iter::once(LocalAnalyzer::NAME))
            .collect()
    }

    pub async fn analyze(&self, content: &str, input_type: InputType) -> AnalysisOutcome {
        for provider in &self.remotes {
            match provider.analyze(content, input_type).await {
                Ok(raw) => {
                    let result = AnalysisResult::normalize(&raw);
                    tracing::info!(
                        provider = provider.name(),
                        risk_score = result.risk_score,
                        "analysis completed"
                    );
                    return AnalysisOutcome {
                        provider: provider.name().to_string(),
                        result,
                    };
                }
                Err(e) => {
                    tracing::warn!(provider = provider.name(), error = %e, "provider failed, falling back");
                }
            }
        }

        let result = self.local.analyze(content, input_type);
        tracing::info!(
            provider = LocalAnalyzer::NAME,
            risk_score = result.risk_score,
            "analysis completed"
        );
        AnalysisOutcome {
            provider: LocalAnalyzer::NAME.to_string(),
            result,
        }
    }
}
