//! exists command - Check whether an object exists in the bucket
//!
//! Metadata-only probe; no body is transferred. A present object exits 0,
//! a missing one exits with the distinct not-found code, and a failed
//! probe (auth, network) exits with the generic failure code.

use clap::Args;
use sx_core::{join_key, Error, ObjectStore, Result};
use sx_s3::S3Client;

use crate::commands::ConnectArgs;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Check whether an object exists in the bucket
#[derive(Args, Debug)]
pub struct ExistsArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// The object key to look for
    #[arg(long)]
    pub object_key: String,

    /// Prefix prepended to the object key
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Execute the exists command
pub async fn execute(args: ExistsArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let key = join_key(args.prefix.as_deref(), &args.object_key);
    tracing::debug!(%key, "resolved object key");

    let params = match args.connect.into_params() {
        Ok(p) => p,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    let client = match S3Client::connect(params).await {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&format!("Failed to create S3 client: {e}"));
            return ExitCode::from_error(&e);
        }
    };

    match run(&client, &key).await {
        Ok(()) => {
            formatter.success(&format!("{key} exists"));
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::from_error(&e)
        }
    }
}

/// Probe `key`, treating absence as an error so the boundary maps it
/// to the not-found exit code
async fn run(store: &impl ObjectStore, key: &str) -> Result<()> {
    if !store.exists(key).await? {
        return Err(Error::NotFound(key.to_string()));
    }

    Ok(())
}
