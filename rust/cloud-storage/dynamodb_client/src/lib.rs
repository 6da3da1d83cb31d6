use aws_config::SdkConfig;
use models_upload_summary::UploadSummaryRecord;

mod upload_summary;

#[derive(Debug, Clone)]
pub struct DynamodbClient {
    pub upload_summary: UploadSummary,
}

impl DynamodbClient {
    pub fn new(aws_config: &SdkConfig, upload_summary_table: &str) -> Self {
        let client = aws_sdk_dynamodb::Client::new(aws_config);

        Self::new_from_client(client, upload_summary_table)
    }

    pub fn new_from_client(client: aws_sdk_dynamodb::Client, upload_summary_table: &str) -> Self {
        Self {
            upload_summary: UploadSummary {
                table: upload_summary_table.to_string(),
                client,
            },
        }
    }
}

/// Access to the table holding one summary record per processed upload
#[derive(Debug, Clone)]
pub struct UploadSummary {
    table: String,
    client: aws_sdk_dynamodb::Client,
}

impl UploadSummary {
    #[tracing::instrument(skip(self, record))]
    pub async fn put_upload_summary(&self, record: &UploadSummaryRecord) -> anyhow::Result<()> {
        upload_summary::put_upload_summary(&self.client, &self.table, record).await
    }
}
