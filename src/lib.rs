pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AskAssistantUseCase, ChatClient, SYSTEM_PROMPT};

pub use connector::{CompletionConfig, Container, OpenRouterClient, Router, WebServer};

pub use domain::{AdviceRequest, DomainError, ExpertiseLevel, Outcome};
