//! Main entry point for the vmconnect CLI

use clap::Parser;
use colored::Colorize;
use vmconnect_cli::Cli;

#[tokio::main]
async fn main() {
    // Values from .env act like environment variables for the clap `env` fallbacks.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = cli.execute().await {
        eprintln!("{} {}", "Error:".red().bold(), vmconnect_cli::user_message(&e));
        std::process::exit(1);
    }
}
