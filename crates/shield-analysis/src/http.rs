//! Status handling for OpenAI-compatible chat completion responses.
//!
//! Both remote providers return the same error envelope
//! (`{"error": {"message": ...}}`), so the message is lifted out of it when
//! present and the raw body is kept otherwise.

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::AnalysisError;

/// Upper bound on how much of an error body is kept for logging.
const MAX_ERROR_BODY: usize = 512;

/// Wait suggested to callers when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Pass a successful response through; turn anything else into an error.
///
/// A 429 carries the parsed `Retry-After` for the fallback log only; nothing
/// waits on it.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AnalysisError> {
    match resp.status() {
        status if status.is_success() => Ok(resp),
        status if status == StatusCode::TOO_MANY_REQUESTS => Err(AnalysisError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        }),
        status => {
            let body = resp.text().await.unwrap_or_default();
            Err(AnalysisError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// The provider's `error.message` if the body is the usual envelope, else
/// the body itself, capped at [`MAX_ERROR_BODY`] bytes.
fn error_message(body: &str) -> String {
    let mut message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| body.trim().to_string());

    if message.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        message.truncate(end);
    }
    message
}
