//! # Connector Layer
//!
//! External integrations around the use case:
//! - `adapter`: the OpenRouter chat-completions HTTP client
//! - `api`: dependency container, controllers and command routing
//! - `web`: the axum web form

pub mod adapter;
pub mod api;
pub mod web;

pub use adapter::*;
pub use api::{Container, Router};
pub use web::WebServer;
