use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;
use s3_client::ObjectHead;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3_client::S3,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3_client::S3) -> Self {
        Self { inner }
    }

    #[tracing::instrument(skip(self))]
    pub async fn head(&self, bucket: &str, key: &str) -> anyhow::Result<ObjectHead> {
        self.inner.head(bucket, key).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_range(&self, bucket: &str, key: &str, len: u64) -> anyhow::Result<Vec<u8>> {
        self.inner.get_range(bucket, key, len).await
    }
}
