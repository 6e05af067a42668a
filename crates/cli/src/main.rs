//! sx - S3 transfer CLI
//!
//! A command-line client for listing, uploading, downloading, and deleting
//! objects in S3-compatible object storage.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod exit_code;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    // Pick up credentials from a local .env before clap reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // --debug forces debug-level logging; otherwise RUST_LOG decides
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let exit_code = commands::execute(cli).await;

    std::process::exit(exit_code.as_i32());
}
