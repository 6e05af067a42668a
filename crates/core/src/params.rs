//! Connection parameters
//!
//! Everything needed to reach one bucket on one S3-compatible endpoint.
//! Constructed once per invocation from CLI flags or environment and
//! never mutated afterwards.

use url::Url;

use crate::error::{Error, Result};

fn default_region() -> String {
    "us-east-1".to_string()
}

/// Connection details for an S3-compatible storage endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    /// Endpoint URL, including the protocol
    pub endpoint: String,

    /// Access key ID
    pub access_key: String,

    /// Secret access key
    pub secret_key: String,

    /// Bucket all operations target
    pub bucket: String,

    /// Region, defaults to us-east-1 (most S3-compatible stores ignore it)
    pub region: String,
}

impl ConnectionParams {
    /// Create connection parameters, validating the endpoint URL
    pub fn new(
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        bucket: impl Into<String>,
        region: Option<String>,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        let parsed = Url::parse(&endpoint)?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::Config(format!(
                "Endpoint must be an http(s) URL: {endpoint}"
            )));
        }

        let bucket = bucket.into();
        if bucket.is_empty() {
            return Err(Error::Config("Bucket name cannot be empty".into()));
        }

        Ok(Self {
            endpoint,
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            bucket,
            region: region.unwrap_or_else(default_region),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_new() {
        let params = ConnectionParams::new(
            "http://localhost:9000",
            "access",
            "secret",
            "data",
            None,
        )
        .unwrap();
        assert_eq!(params.endpoint, "http://localhost:9000");
        assert_eq!(params.bucket, "data");
        assert_eq!(params.region, "us-east-1");
    }

    #[test]
    fn test_params_custom_region() {
        let params = ConnectionParams::new(
            "https://ams3.digitaloceanspaces.com",
            "a",
            "s",
            "data",
            Some("ams3".into()),
        )
        .unwrap();
        assert_eq!(params.region, "ams3");
    }

    #[test]
    fn test_params_rejects_bad_endpoint() {
        let result = ConnectionParams::new("not a url", "a", "s", "data", None);
        assert!(matches!(result.unwrap_err(), Error::InvalidUrl(_)));

        let result = ConnectionParams::new("ftp://example.com", "a", "s", "data", None);
        assert!(matches!(result.unwrap_err(), Error::Config(_)));
    }

    #[test]
    fn test_params_rejects_empty_bucket() {
        let result = ConnectionParams::new("http://localhost:9000", "a", "s", "", None);
        assert!(matches!(result.unwrap_err(), Error::Config(_)));
    }
}
