mod completion_config;
mod openrouter_client;

pub use completion_config::*;
pub use openrouter_client::*;
