use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;
use models_upload_summary::UploadSummaryRecord;

#[cfg(not(test))]
pub use DBClient as DB;
#[cfg(test)]
pub use MockDBClient as DB;

#[derive(Clone, Debug)]
pub struct DBClient {
    inner: dynamodb_client::UploadSummary,
}

#[cfg_attr(test, automock)]
impl DBClient {
    pub fn new(inner: dynamodb_client::UploadSummary) -> Self {
        Self { inner }
    }

    #[tracing::instrument(skip(self, record))]
    pub async fn put_upload_summary(&self, record: &UploadSummaryRecord) -> anyhow::Result<()> {
        self.inner.put_upload_summary(record).await
    }
}
