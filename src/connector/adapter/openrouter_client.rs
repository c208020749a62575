use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use crate::application::ChatClient;
use crate::connector::adapter::CompletionConfig;
use crate::domain::DomainError;

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 500;

/// OpenAI-style chat-completions request payload.
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// The response shapes we recognise. Anything else falls through to
/// [`DomainError::UnexpectedFormat`].
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

/// `message` stays loosely typed: a present `content` key wins even when it
/// is `null` or a list of content parts.
#[derive(Deserialize)]
struct ApiChoice {
    #[serde(default)]
    message: Option<serde_json::Map<String, Value>>,
    #[serde(default)]
    text: Option<String>,
}

/// HTTP client for the OpenRouter chat-completions API (and any
/// OpenAI-compatible endpoint).
///
/// Implements [`ChatClient`] so the use case stays decoupled from transport
/// and serialization details. One `reqwest::Client` is built per instance and
/// reused for every call, so concurrent callers share only the connection
/// pool.
///
/// The HTTP status is logged but not acted on: upstream error payloads arrive
/// with 4xx/5xx codes and are surfaced through the body.
pub struct OpenRouterClient {
    client: reqwest::Client,
    config: CompletionConfig,
    url: String,
}

impl OpenRouterClient {
    pub fn new(config: CompletionConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DomainError::configuration(format!("failed to build HTTP client: {e}")))?;
        let url = config.completions_url();
        Ok(Self {
            client,
            config,
            url,
        })
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Map a raw response body onto the answer text or a [`DomainError`].
    ///
    /// Precedence: an `error` member wins, then `choices[0].message.content`,
    /// then `choices[0].text`.
    pub(crate) fn interpret_response(body: &str) -> Result<String, DomainError> {
        let response: ApiResponse = serde_json::from_str(body)
            .map_err(|e| DomainError::transport(format!("failed to parse response: {e}")))?;

        if let Some(err) = response.error {
            let message = match &err {
                Value::String(s) => s.as_str(),
                other => other
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("Unknown error"),
            };
            return Err(DomainError::upstream(message));
        }

        let Some(choice) = response.choices.into_iter().next() else {
            return Err(DomainError::UnexpectedFormat);
        };

        if let Some(content) = choice.message.as_ref().and_then(|m| m.get("content")) {
            return Ok(Self::content_text(content));
        }

        choice.text.ok_or(DomainError::UnexpectedFormat)
    }

    /// Flatten a `message.content` value into display text. Content-part
    /// arrays contribute the `text` of each part.
    fn content_text(content: &Value) -> String {
        match content {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            Value::Array(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    Value::String(s) => Some(s.as_str()),
                    other => other.get("text").and_then(Value::as_str),
                })
                .collect::<Vec<_>>()
                .join(""),
            other => other.to_string(),
        }
    }

    async fn send(&self, request: &ApiRequest<'_>) -> Result<String, DomainError> {
        match serde_json::to_string_pretty(request) {
            Ok(payload) => debug!("Sending request with data: {payload}"),
            Err(e) => debug!("Could not render request payload for logging: {e}"),
        }

        let mut builder = self
            .client
            .post(&self.url)
            .bearer_auth(self.config.api_key())
            .json(request);
        if let Some(referer) = self.config.referer() {
            builder = builder.header("HTTP-Referer", referer);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("request failed: {e}")))?;
        debug!("Response status code: {}", response.status().as_u16());

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::transport(format!("failed to read response body: {e}")))?;
        debug!("Raw response: {body}");

        Ok(body)
    }
}

#[async_trait]
impl ChatClient for OpenRouterClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: self.config.model(),
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: system,
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let result = self
            .send(&request)
            .await
            .and_then(|body| Self::interpret_response(&body));

        if let Err(ref e) = result {
            if e.is_transport() {
                error!("Error in API call: {e}");
            }
        }

        result
    }
}
