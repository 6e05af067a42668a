//! upload command - Upload one local file to the bucket
//!
//! The remote key is the prefix joined with --object-key, or with the
//! file's base name when no key is given. A missing local source exits
//! with the not-found code before anything is sent; an existing remote
//! object is overwritten unconditionally.

use std::path::{Path, PathBuf};

use clap::Args;
use sx_core::{resolve_key, Error, ObjectStore, Result};
use sx_s3::S3Client;

use crate::commands::ConnectArgs;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Upload one local file to the bucket
#[derive(Args, Debug)]
pub struct UploadArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// The local path of the file to upload
    #[arg(long)]
    pub local_path: PathBuf,

    /// The object key; defaults to the file name of --local-path
    #[arg(long)]
    pub object_key: Option<String>,

    /// Prefix prepended to the object key
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Execute the upload command
pub async fn execute(args: UploadArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let key = resolve_key(
        args.prefix.as_deref(),
        args.object_key.as_deref(),
        &args.local_path,
    );
    tracing::debug!(%key, "resolved object key");
    formatter.println(&format!("Upload {} to {key}", args.local_path.display()));

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

    match run(&client, &args.local_path, &key).await {
        Ok(size) => {
            formatter.success(&format!(
                "Uploaded {key} ({})",
                humansize::format_size(size, humansize::BINARY)
            ));
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::from_error(&e)
        }
    }
}

/// Upload `source` under `key`, returning the number of bytes sent
///
/// Gates on the local source existing; the remote key is not probed, so
/// uploads overwrite freely.
async fn run(store: &impl ObjectStore, source: &Path, key: &str) -> Result<u64> {
    if !source.is_file() {
        return Err(Error::NotFound(source.display().to_string()));
    }

    let size = std::fs::metadata(source)?.len();

    let guessed_type: Option<String> = mime_guess::from_path(source)
        .first()
        .map(|m| m.essence_str().to_string());

    store.put_object(key, source, guessed_type.as_deref()).await?;

    Ok(size)
}
