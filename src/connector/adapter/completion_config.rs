use std::time::Duration;

use crate::domain::DomainError;

pub const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";
pub const DEFAULT_REFERER: &str = "https://localhost:7860";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything [`super::OpenRouterClient`] needs, injected at construction.
///
/// The bearer credential is mandatory: a missing or blank key is rejected
/// here, before any client exists.
#[derive(Clone)]
pub struct CompletionConfig {
    api_key: String,
    api_base: String,
    model: String,
    referer: Option<String>,
    timeout: Duration,
}

impl CompletionConfig {
    pub fn new(api_key: Option<String>) -> Result<Self, DomainError> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                DomainError::configuration("OpenRouter API key not found in environment variables")
            })?;

        Ok(Self {
            api_key,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            referer: Some(DEFAULT_REFERER.to_string()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// `None` omits the `HTTP-Referer` header entirely.
    pub fn with_referer(mut self, referer: Option<String>) -> Self {
        self.referer = referer.filter(|r| !r.is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn referer(&self) -> Option<&str> {
        self.referer.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full chat-completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("referer", &self.referer)
            .field("timeout", &self.timeout)
            .finish()
    }
}
