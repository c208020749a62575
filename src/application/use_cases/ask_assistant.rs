use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::application::ChatClient;
use crate::domain::{AdviceRequest, Outcome};

/// Fixed instruction sent as the system message of every request.
pub const SYSTEM_PROMPT: &str = "You are a specialized solar industry consultant AI assistant. \
Provide accurate, practical advice while adapting your responses to the user's technical \
expertise level.";

/// Turns one [`AdviceRequest`] into exactly one chat completion and folds the
/// result into an [`Outcome`]. Errors never escape: they become the failure
/// text shown to the user.
pub struct AskAssistantUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl AskAssistantUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn execute(&self, request: &AdviceRequest) -> Outcome {
        info!("Asking assistant (expertise={})", request.expertise());
        let start_time = Instant::now();

        let result = self
            .chat_client
            .complete(SYSTEM_PROMPT, &request.user_prompt())
            .await;

        if let Err(ref e) = result {
            warn!("Assistant call failed: {e}");
        }

        let outcome = Outcome::from(result);
        info!(
            "Assistant responded in {:?} (answer={})",
            start_time.elapsed(),
            outcome.is_answer()
        );
        outcome
    }

    /// Shorthand for callers holding the two form fields directly.
    pub async fn ask(&self, query: &str, expertise: &str) -> Outcome {
        self.execute(&AdviceRequest::new(query).with_expertise(expertise))
            .await
    }
}
