use anyhow::Result;

use crate::cli::Commands;

use super::container::Container;
use super::controller::{AskController, ServeController};

pub struct Router<'a> {
    ask_controller: AskController<'a>,
    serve_controller: ServeController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            ask_controller: AskController::new(container),
            serve_controller: ServeController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { query, expertise } => self.ask_controller.ask(query, expertise).await,
            Commands::Serve { host, port, public } => {
                self.serve_controller.serve(host, port, public).await
            }
        }
    }
}
