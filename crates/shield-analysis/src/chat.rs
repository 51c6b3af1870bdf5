//! OpenAI-compatible `/chat/completions` provider.
//!
//! Groq and OpenAI expose the same wire protocol; they differ only in base
//! URL, model and sampling settings, so one client type serves both.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shield_config::{GroqConfig, OpenAiConfig};
use shield_core::enums::InputType;

use crate::error::AnalysisError;
use crate::http::check_response;
use crate::prompt::{SYSTEM_PROMPT, user_prompt};
use crate::provider::AnalysisProvider;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// One configured chat-completions endpoint.
pub struct ChatCompletionsProvider {
    name: &'static str,
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl ChatCompletionsProvider {
    /// Provider A.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Setup`] if the HTTP client cannot be built.
    pub fn groq(config: &GroqConfig) -> Result<Self, AnalysisError> {
        Self::build(
            "groq",
            &config.base_url,
            config.api_key.trim(),
            &config.model,
            Some(config.temperature),
            Some(config.max_tokens),
            config.timeout_secs,
        )
    }

    /// Provider B.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Setup`] if the HTTP client cannot be built.
    pub fn openai(config: &OpenAiConfig) -> Result<Self, AnalysisError> {
        Self::build(
            "openai",
            &config.base_url,
            config.api_key.trim(),
            &config.model,
            config.temperature,
            config.max_tokens,
            config.timeout_secs,
        )
    }

    fn build(
        name: &'static str,
        base_url: &str,
        api_key: &str,
        model: &str,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
        timeout_secs: u64,
    ) -> Result<Self, AnalysisError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("jobshield/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AnalysisError::Setup {
                provider: name,
                reason: e.to_string(),
            })?;

        Ok(Self {
            name,
            http,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            model: model.to_string(),
            temperature,
            max_tokens,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl AnalysisProvider for ChatCompletionsProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn analyze(&self, content: &str, input_type: InputType) -> Result<Value, AnalysisError> {
        let user = user_prompt(input_type, content);
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let completion: ChatResponse = resp.json().await?;
        parse_completion(completion)
    }
}

/// Extract the JSON object from the first choice of a completion.
fn parse_completion(completion: ChatResponse) -> Result<Value, AnalysisError> {
    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or(AnalysisError::MissingContent)?;

    let value: Value = serde_json::from_str(strip_code_fence(&content))
        .map_err(|e| AnalysisError::Parse(e.to_string()))?;
    if !value.is_object() {
        return Err(AnalysisError::Parse(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }
    Ok(value)
}

/// Some models wrap JSON mode output in a Markdown fence anyway.
fn strip_code_fence(s: &str) -> &str {
    let s = s.trim();
    let Some(inner) = s.strip_prefix("```") else {
        return s;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

const fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
