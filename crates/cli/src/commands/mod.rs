//! CLI command definitions and execution
//!
//! Each subcommand owns its argument struct; the shared connection flags
//! are flattened in as a per-invocation value object.

use clap::{Args, Parser, Subcommand};

use sx_core::{ConnectionParams, Result};

use crate::exit_code::ExitCode;
use crate::output::OutputConfig;

mod delete;
mod download;
mod exists;
mod list;
mod upload;

#[cfg(test)]
pub(crate) mod memstore;

/// sx - S3 transfer CLI
///
/// List, upload, download, and delete objects in an S3-compatible
/// object store.
#[derive(Parser, Debug)]
#[command(name = "sx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all objects in the bucket
    List(list::ListArgs),

    /// Upload one local file to the bucket (overwrites any existing object)
    Upload(upload::UploadArgs),

    /// Download one object to a local file (overwrites any existing file)
    Download(download::DownloadArgs),

    /// Check whether an object exists in the bucket
    Exists(exists::ExistsArgs),

    /// Remove one object from the bucket
    Delete(delete::DeleteArgs),
}

/// Connection flags shared by every subcommand
///
/// Each value falls back to an `SX_*` environment variable, which a
/// local `.env` file can populate.
#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// The endpoint URL of the service, including the protocol
    #[arg(long, env = "SX_ENDPOINT")]
    pub endpoint: String,

    /// The access key ID
    #[arg(long, env = "SX_ACCESS_KEY", hide_env_values = true)]
    pub access_key: String,

    /// The secret access key
    #[arg(long, env = "SX_SECRET_KEY", hide_env_values = true)]
    pub secret_key: String,

    /// The bucket to operate on
    #[arg(long, env = "SX_BUCKET")]
    pub bucket: String,

    /// Region requests are signed for
    #[arg(long, env = "SX_REGION")]
    pub region: Option<String>,
}

impl ConnectArgs {
    /// Validate the flags into immutable connection parameters
    pub fn into_params(self) -> Result<ConnectionParams> {
        ConnectionParams::new(
            self.endpoint,
            self.access_key,
            self.secret_key,
            self.bucket,
            self.region,
        )
    }
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        no_color: cli.no_color,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::List(args) => list::execute(args, output_config).await,
        Commands::Upload(args) => upload::execute(args, output_config).await,
        Commands::Download(args) => download::execute(args, output_config).await,
        Commands::Exists(args) => exists::execute(args, output_config).await,
        Commands::Delete(args) => delete::execute(args, output_config).await,
    }
}
