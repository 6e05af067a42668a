//! list command - List objects in the bucket
//!
//! Prints one key per line, relative to the requested prefix, paging
//! through the listing until the store reports no further pages.

use clap::Args;
use sx_core::{strip_key_prefix, ObjectStore, Result};
use sx_s3::S3Client;

use crate::commands::ConnectArgs;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// List all objects in the bucket
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// Only list objects whose keys start with this prefix
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Execute the list command
pub async fn execute(args: ListArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

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

    match collect_keys(&client, args.prefix.as_deref()).await {
        Ok(keys) => {
            for key in keys {
                formatter.println(&key);
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to list objects: {e}"));
            ExitCode::from_error(&e)
        }
    }
}

/// Collect all matching keys, relative to the prefix
///
/// Pages through the listing with continuation tokens and drops
/// directory markers. Order is whatever the store returns, which the
/// S3 contract fixes as lexicographic.
async fn collect_keys(store: &impl ObjectStore, prefix: Option<&str>) -> Result<Vec<String>> {
    let mut keys = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let page = store
            .list_page(prefix, continuation_token.as_deref())
            .await?;

        for entry in &page.entries {
            if entry.is_dir_marker() {
                continue;
            }
            keys.push(strip_key_prefix(prefix, &entry.key).to_string());
        }

        match page.continuation_token {
            Some(token) => continuation_token = Some(token),
            None => break,
        }
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::memstore::MemStore;

    #[tokio::test]
    async fn test_list_strips_prefix_and_skips_markers() {
        let store = MemStore::default();
        store.insert("logs/a.txt", b"aaa");
        store.insert("logs/b/", b"");
        store.insert("logs/c.txt", b"ccc");
        store.insert("other/d.txt", b"ddd");

        let keys = collect_keys(&store, Some("logs/")).await.unwrap();
        assert_eq!(keys, vec!["a.txt", "c.txt"]);
    }

    #[tokio::test]
    async fn test_list_without_prefix_returns_full_keys() {
        let store = MemStore::default();
        store.insert("logs/a.txt", b"aaa");
        store.insert("z.txt", b"zzz");

        let keys = collect_keys(&store, None).await.unwrap();
        assert_eq!(keys, vec!["logs/a.txt", "z.txt"]);
    }

    #[tokio::test]
    async fn test_list_pages_until_exhausted() {
        // MemStore serves two entries per page; five objects means three pages.
        let store = MemStore::default();
        for i in 0..5 {
            store.insert(&format!("k{i}"), b"x");
        }

        let keys = collect_keys(&store, None).await.unwrap();
        assert_eq!(keys, vec!["k0", "k1", "k2", "k3", "k4"]);
    }

    #[tokio::test]
    async fn test_list_empty_bucket() {
        let store = MemStore::default();
        let keys = collect_keys(&store, None).await.unwrap();
        assert!(keys.is_empty());
    }
}
