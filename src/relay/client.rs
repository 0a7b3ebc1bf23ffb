use super::types::*;
use crate::{
    Error, Result,
    config::{ApiKey, Config},
    persona,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Upper bound on a single upstream call. The call is made once, with no
/// retry; the full response is buffered before translation.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Forward a conversation to the completion API and return the first
    /// generated text segment.
    async fn complete(&self, messages: &[Message]) -> Result<String>;
}

pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: Option<ApiKey>,
    url: String,
}

impl AnthropicClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            url: config.upstream_url.clone(),
        })
    }
}

#[async_trait]
impl UpstreamClient for AnthropicClient {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        let payload = MessagesRequest {
            model: persona::MODEL,
            max_tokens: persona::MAX_TOKENS,
            system: persona::SYSTEM_PROMPT,
            messages,
        };

        debug!("forwarding {} messages upstream", messages.len());

        // The credential travels only in this header, never in the payload.
        let mut request = self
            .client
            .post(&self.url)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&payload);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key.expose());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(translate_error(status, &body));
        }

        let parsed: MessagesResponse = serde_json::from_str(&body)
            .map_err(|e| Error::internal(format!("unexpected upstream success payload: {e}")))?;
        let first = parsed
            .content
            .into_iter()
            .next()
            .ok_or_else(|| Error::internal("upstream returned no content segments"))?;

        Ok(first.text)
    }
}

/// Ordered translation of an upstream failure into the client-facing error
/// vocabulary. First match wins: explicit statuses before the credit/billing
/// keyword fallback, the keyword fallback before the generic upstream error.
pub fn translate_error(status: StatusCode, body: &str) -> Error {
    match status {
        StatusCode::UNAUTHORIZED => Error::InvalidApiKey,
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited,
        StatusCode::PAYMENT_REQUIRED => Error::OutOfCredits,
        _ => {
            let detail: UpstreamErrorBody = serde_json::from_str(body).unwrap_or_default();
            let message = detail.error.message;
            let lowered = message.to_lowercase();
            // Billing exhaustion is not always signalled with a 402; the
            // error text is the only other signal the upstream gives us.
            if lowered.contains("credit") || lowered.contains("billing") {
                Error::OutOfCredits
            } else {
                Error::Upstream {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}
