//! sx-core: Core library for the sx S3 CLI client
//!
//! This crate provides the core functionality for the sx CLI, including:
//! - Connection parameter handling
//! - Object key resolution and prefix normalization
//! - The error taxonomy and its exit-code mapping
//! - ObjectStore trait for S3 operations
//!
//! This crate is designed to be independent of any specific S3 SDK,
//! allowing for easy testing and potential future support for other backends.

pub mod error;
pub mod key;
pub mod params;
pub mod traits;

pub use error::{Error, Result};
pub use key::{join_key, resolve_key, strip_key_prefix};
pub use params::ConnectionParams;
pub use traits::{ListPage, ObjectEntry, ObjectStore};
