use async_trait::async_trait;

use crate::domain::DomainError;

/// One-shot chat completion: a fixed system instruction plus a single user turn.
///
/// [`crate::OpenRouterClient`] is the production implementation; tests swap in
/// stubs. Implementations make one upstream attempt per call and report every
/// failure as a [`DomainError`] whose Display text is shown to the user.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError>;
}
