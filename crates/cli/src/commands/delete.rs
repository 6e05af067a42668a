//! delete command - Remove one object from the bucket
//!
//! Probes the key first so a missing object exits with the distinct
//! not-found code instead of whatever the store's delete call reports.

use clap::Args;
use sx_core::{join_key, Error, ObjectStore, Result};
use sx_s3::S3Client;

use crate::commands::ConnectArgs;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Remove one object from the bucket
#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// The object key (what a file name is called in an S3 environment)
    #[arg(long)]
    pub object_key: String,

    /// Prefix prepended to the object key
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Execute the delete command
pub async fn execute(args: DeleteArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let key = join_key(args.prefix.as_deref(), &args.object_key);
    tracing::debug!(%key, "resolved object key");
    formatter.println(&format!("Delete {key}"));

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
            formatter.success(&format!("Deleted {key}"));
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::from_error(&e)
        }
    }
}

/// Delete `key` after confirming it exists
async fn run(store: &impl ObjectStore, key: &str) -> Result<()> {
    if !store.exists(key).await? {
        return Err(Error::NotFound(key.to_string()));
    }

    store.delete_object(key).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::memstore::MemStore;

    #[tokio::test]
    async fn test_delete_existing_key() {
        let store = MemStore::default();
        store.insert("old/data.csv", b"1,2,3");

        run(&store, "old/data.csv").await.unwrap();

        // A follow-up existence probe reports not-found.
        assert!(!store.exists("old/data.csv").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_not_found() {
        let store = MemStore::default();
        let result = run(&store, "nope.txt").await;
        assert!(matches!(result.unwrap_err(), Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_leaves_other_objects() {
        let store = MemStore::default();
        store.insert("a.txt", b"a");
        store.insert("b.txt", b"b");

        run(&store, "a.txt").await.unwrap();
        assert!(store.contains("b.txt"));
    }
}
