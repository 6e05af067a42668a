//! ObjectStore trait definition
//!
//! This trait defines the interface for S3-compatible storage operations.
//! It allows the CLI to be decoupled from the specific S3 SDK implementation.

use async_trait::async_trait;

use crate::error::Result;

/// One entry from a list response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    /// Full object key as returned by the store
    pub key: String,

    /// Size in bytes
    pub size_bytes: i64,
}

impl ObjectEntry {
    /// Create a new ObjectEntry
    pub fn new(key: impl Into<String>, size_bytes: i64) -> Self {
        Self {
            key: key.into(),
            size_bytes,
        }
    }

    /// Whether this entry is a directory marker (key ends with `/`)
    ///
    /// Some stores materialize zero-byte objects for "folders"; listings
    /// skip them.
    pub fn is_dir_marker(&self) -> bool {
        self.key.ends_with('/')
    }
}

/// One page of a list operation
///
/// The store hands back an opaque continuation token while more pages
/// remain; callers loop until `continuation_token` is `None`.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    /// Entries in this page, in the store's native (lexicographic) order
    pub entries: Vec<ObjectEntry>,

    /// Token for the next page, if the listing is truncated
    pub continuation_token: Option<String>,
}

/// Trait for S3-compatible storage operations
///
/// Implemented by the S3 adapter; a fake in-memory implementation backs
/// the command tests. All operations act on the bucket the client was
/// constructed with.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List one page of objects whose keys start with `prefix`
    async fn list_page(
        &self,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> Result<ListPage>;

    /// Metadata-only existence probe
    ///
    /// `Ok(true)` if the object exists, `Ok(false)` on a not-found
    /// response, `Err` for any other failure (auth, network, malformed
    /// bucket). No body is transferred.
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Get object content as bytes
    async fn get_object(&self, key: &str) -> Result<Vec<u8>>;

    /// Upload a local file to `key`, overwriting any existing object
    async fn put_object(
        &self,
        key: &str,
        source: &std::path::Path,
        content_type: Option<&str>,
    ) -> Result<()>;

    /// Delete a single object
    async fn delete_object(&self, key: &str) -> Result<()>;
}
