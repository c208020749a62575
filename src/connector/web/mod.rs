//! Browser-facing form around [`AskAssistantUseCase`].
//!
//! - `GET /` renders the form, optionally prefilled from `?query=&expertise=`
//! - `POST /ask` submits the form and renders the response in place
//! - `POST /api/ask` does the same with JSON in and out

mod handlers;
pub mod page;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tracing::info;

use crate::application::AskAssistantUseCase;

pub use handlers::{AskBody, AskForm, AskReply};

#[derive(Clone)]
struct WebState {
    assistant: Arc<AskAssistantUseCase>,
}

pub struct WebServer {
    assistant: Arc<AskAssistantUseCase>,
}

impl WebServer {
    pub fn new(assistant: Arc<AskAssistantUseCase>) -> Self {
        Self { assistant }
    }

    pub fn router(&self) -> axum::Router {
        axum::Router::new()
            .route("/", get(handlers::index))
            .route("/ask", post(handlers::ask_form))
            .route("/api/ask", post(handlers::ask_json))
            .with_state(WebState {
                assistant: self.assistant.clone(),
            })
    }

    pub async fn run(
        self,
        addr: SocketAddr,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        info!("Web form listening on {}", listener.local_addr()?);
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("Web form stopped");
        Ok(())
    }
}
