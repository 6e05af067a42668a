//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from sx-core.

use std::path::Path;

use async_trait::async_trait;

use sx_core::{ConnectionParams, Error, ListPage, ObjectEntry, ObjectStore, Result};

fn is_not_found(message: &str) -> bool {
    message.contains("NotFound") || message.contains("NoSuchKey") || message.contains("404")
}

/// S3 client wrapper
///
/// Holds one SDK client and the bucket every operation targets.
pub struct S3Client {
    inner: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Client {
    /// Create a new S3 client from connection parameters
    pub async fn connect(params: ConnectionParams) -> Result<Self> {
        // Build credentials provider
        let credentials = aws_credential_types::Credentials::new(
            params.access_key.clone(),
            params.secret_key.clone(),
            None, // session token
            None, // expiry
            "sx-static-credentials",
        );

        // Build SDK config
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(aws_config::Region::new(params.region.clone()))
            .endpoint_url(&params.endpoint)
            .load()
            .await;

        // Path-style addressing for S3-compatible stores (MinIO, Spaces, ...)
        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(true)
            .build();

        let client = aws_sdk_s3::Client::from_conf(s3_config);

        Ok(Self {
            inner: client,
            bucket: params.bucket,
        })
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn list_page(
        &self,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> Result<ListPage> {
        tracing::debug!(bucket = %self.bucket, ?prefix, "listing objects");

        let mut request = self.inner.list_objects_v2().bucket(&self.bucket);

        if let Some(p) = prefix {
            request = request.prefix(p);
        }

        if let Some(token) = continuation_token {
            request = request.continuation_token(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transfer(e.to_string()))?;

        let entries = response
            .contents()
            .iter()
            .map(|object| {
                ObjectEntry::new(
                    object.key().unwrap_or_default(),
                    object.size().unwrap_or(0),
                )
            })
            .collect();

        let continuation_token = if response.is_truncated().unwrap_or(false) {
            response.next_continuation_token().map(|s| s.to_string())
        } else {
            None
        };

        Ok(ListPage {
            entries,
            continuation_token,
        })
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        tracing::debug!(bucket = %self.bucket, key, "probing object existence");

        match self
            .inner
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                let err_str = e.to_string();
                if is_not_found(&err_str) {
                    Ok(false)
                } else {
                    Err(Error::Transfer(err_str))
                }
            }
        }
    }

    async fn get_object(&self, key: &str) -> Result<Vec<u8>> {
        tracing::debug!(bucket = %self.bucket, key, "downloading object");

        let response = self
            .inner
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let err_str = e.to_string();
                if is_not_found(&err_str) {
                    Error::NotFound(key.to_string())
                } else {
                    Error::Transfer(err_str)
                }
            })?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| Error::Transfer(e.to_string()))?
            .into_bytes()
            .to_vec();

        Ok(data)
    }

    async fn put_object(
        &self,
        key: &str,
        source: &Path,
        content_type: Option<&str>,
    ) -> Result<()> {
        tracing::debug!(bucket = %self.bucket, key, source = %source.display(), "uploading object");

        // The SDK streams the file; multipart splitting is its concern.
        let body = aws_sdk_s3::primitives::ByteStream::from_path(source)
            .await
            .map_err(|e| Error::Transfer(e.to_string()))?;

        let mut request = self
            .inner
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body);

        if let Some(ct) = content_type {
            request = request.content_type(ct);
        }

        request
            .send()
            .await
            .map_err(|e| Error::Transfer(e.to_string()))?;

        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        tracing::debug!(bucket = %self.bucket, key, "deleting object");

        self.inner
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let err_str = e.to_string();
                if is_not_found(&err_str) {
                    Error::NotFound(key.to_string())
                } else {
                    Error::Transfer(err_str)
                }
            })?;

        Ok(())
    }
}
