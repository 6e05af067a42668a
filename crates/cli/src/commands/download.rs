//! download command - Download one object to a local file
//!
//! Probes the remote key first and exits with the not-found code before
//! any file write when the object is absent. The body lands in a
//! temporary file next to the destination and is renamed into place, so
//! a failed transfer never leaves a corrupt partial download behind.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use clap::Args;
use sx_core::{join_key, Error, ObjectStore, Result};
use sx_s3::S3Client;

use crate::commands::ConnectArgs;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Download one object to a local file
#[derive(Args, Debug)]
pub struct DownloadArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// The local path to write the download to
    #[arg(long)]
    pub local_path: PathBuf,

    /// The object key (what a file name is called in an S3 environment)
    #[arg(long)]
    pub object_key: String,

    /// Prefix prepended to the object key
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Execute the download command
pub async fn execute(args: DownloadArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let key = join_key(args.prefix.as_deref(), &args.object_key);
    tracing::debug!(%key, "resolved object key");
    formatter.println(&format!("Download {key} to {}", args.local_path.display()));

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

    match run(&client, &key, &args.local_path).await {
        Ok(size) => {
            formatter.success(&format!(
                "Downloaded {key} ({})",
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

/// Download `key` to `dest`, returning the number of bytes written
///
/// Gates on the remote object existing, then writes atomically via a
/// temp file in the destination directory.
async fn run(store: &impl ObjectStore, key: &str, dest: &Path) -> Result<u64> {
    if !store.exists(key).await? {
        return Err(Error::NotFound(key.to_string()));
    }

    let data = store.get_object(key).await?;

    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&data)?;
    tmp.persist(dest).map_err(|e| Error::Io(e.error))?;

    Ok(data.len() as u64)
}
