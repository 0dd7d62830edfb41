//! vmconnect command-line interface
//!
//! - `vmconnect build` assembles the greeting and customer-queue flows
//! - `vmconnect classify` shows what a transcription status change resolves to

use clap::{Parser, Subcommand};
use vmconnect::flow_core::FlowError;
use vmconnect::infra_common::logging::{log_welcome, parse_log_level};
use vmconnect::infra_common::{setup_logging, LoggingConfig};

pub mod commands;

/// Voicemail routing tools for contact centers
#[derive(Debug, Parser)]
#[command(name = "vmconnect")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn", env = "VMCONNECT_LOG_LEVEL")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the VM-Greeting and VM-Agent contact flows
    Build(commands::build::BuildArgs),

    /// Classify a transcription status change
    Classify(commands::classify::ClassifyArgs),
}

impl Cli {
    /// Install logging, then run the selected command
    pub async fn execute(self) -> anyhow::Result<()> {
        let level = parse_log_level(&self.log_level)?;
        let mut logging = LoggingConfig::new(level, "vmconnect");
        if self.json_logs {
            logging = logging.with_json();
        }
        // A subscriber may already be installed when running embedded (tests).
        if let Err(e) = setup_logging(logging) {
            tracing::debug!("Logging not initialized: {}", e);
        }
        log_welcome("vmconnect", env!("CARGO_PKG_VERSION"));

        self.run().await
    }

    /// Run the selected command without touching the global logger
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Build(args) => commands::build::execute(args).await,
            Command::Classify(args) => commands::classify::execute(args),
        }
    }
}

/// Message to show the operator for a failed command
pub fn user_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<FlowError>() {
        Some(flow_error) => flow_error.user_message(),
        None => format!("{:#}", error),
    }
}
