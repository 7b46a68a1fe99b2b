//! Storage provider trait: the byte-stream sink attachments are written to.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// Metadata about a stored object.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StorageObjectMeta {
    /// Path relative to the provider root.
    pub path: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Last modified timestamp.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    /// Whether this is a directory.
    pub is_directory: bool,
}

/// A byte stream used for incoming upload bodies.
///
/// The lifetime lets callers hand over streams that borrow the request
/// (e.g. a multipart field) without buffering them first.
pub type ByteStream<'a> = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send + 'a>>;

/// Trait for file storage backends.
///
/// Paths are always relative to the provider's configured root.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write a byte stream to `path`, returning the number of bytes written.
    ///
    /// The file only becomes visible at `path` once the stream has been
    /// fully written; on error nothing is left at `path`. The stream is
    /// consumed and dropped on every path out of this call.
    async fn write_stream(&self, path: &str, stream: ByteStream<'_>) -> AppResult<u64>;

    /// Delete the file at `path`. Returns `false` when there was nothing to
    /// delete; a missing file is not an error.
    async fn delete(&self, path: &str) -> AppResult<bool>;

    /// Check whether a file exists at `path`.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// List the entries directly under `path`.
    async fn list(&self, path: &str) -> AppResult<Vec<StorageObjectMeta>>;
}
