mod logging;

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::connector::adapter::{
    CompletionConfig, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_REFERER, DEFAULT_TIMEOUT_SECS,
};
use crate::domain::DomainError;

pub use logging::init_logging;

#[derive(Parser)]
#[command(name = "solar-assistant")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log everything at debug level, not just this crate
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Bearer credential for the completion API
    #[arg(long, global = true, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, global = true, env = "OPENROUTER_BASE_URL", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, global = true, env = "OPENROUTER_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sent as `HTTP-Referer`; pass an empty string to omit it
    #[arg(long, global = true, env = "OPENROUTER_REFERER", default_value = DEFAULT_REFERER)]
    pub referer: String,

    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Append-only debug log
    #[arg(long, global = true, default_value = "solar_assistant.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Fails when no usable API key was supplied.
    pub fn completion_config(&self) -> Result<CompletionConfig, DomainError> {
        Ok(CompletionConfig::new(self.api_key.clone())?
            .with_api_base(&self.api_base)
            .with_model(&self.model)
            .with_referer(Some(self.referer.clone()))
            .with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the web form
    Serve {
        /// Address to bind; overrides --public
        #[arg(long)]
        host: Option<IpAddr>,

        #[arg(short, long, default_value_t = 7860)]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the form on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Ask a single question and print the response
    Ask {
        query: String,

        #[arg(short, long, default_value = "general")]
        expertise: String,
    },
}
