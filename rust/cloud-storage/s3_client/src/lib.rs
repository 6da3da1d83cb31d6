//! Read access to the upload bucket

use chrono::{DateTime, Utc};

mod get;
mod head;

/// The subset of a head object response that callers care about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectHead {
    pub content_type: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    /// The raw etag, quotes included
    pub e_tag: Option<String>,
}

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }

    /// Retrieves the metadata of the provided key without reading its body.
    #[tracing::instrument(skip(self))]
    pub async fn head(&self, bucket: &str, key: &str) -> anyhow::Result<ObjectHead> {
        head::head(&self.inner, bucket, key).await
    }

    /// Retrieves at most the first `len` bytes of the provided key.
    #[tracing::instrument(skip(self))]
    pub async fn get_range(&self, bucket: &str, key: &str, len: u64) -> anyhow::Result<Vec<u8>> {
        get::get_range(&self.inner, bucket, key, len).await
    }
}
