use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{AskAssistantUseCase, ChatClient};
use crate::connector::adapter::{CompletionConfig, OpenRouterClient};

/// Wires configuration to the HTTP adapter and the use case.
///
/// Built once at startup; everything it hands out is shared read-only across
/// requests.
pub struct Container {
    ask_use_case: Arc<AskAssistantUseCase>,
    model: String,
}

impl Container {
    pub fn new(config: CompletionConfig) -> Result<Self> {
        debug!("Initializing OpenRouter client: {:?}", config);
        let client = OpenRouterClient::new(config)?;
        let model = client.config().model().to_string();
        Ok(Self::with_chat_client(Arc::new(client), model))
    }

    /// Build around any [`ChatClient`], e.g. a stub in tests.
    pub fn with_chat_client(chat_client: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            ask_use_case: Arc::new(AskAssistantUseCase::new(chat_client)),
            model: model.into(),
        }
    }

    pub fn ask_use_case(&self) -> Arc<AskAssistantUseCase> {
        self.ask_use_case.clone()
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}
