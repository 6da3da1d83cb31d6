use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use models_upload_summary::UploadSummaryRecord;

/// Converts the record into the attribute map stored in the summary table
pub(crate) fn to_item(record: &UploadSummaryRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::from([
        ("file_key".to_string(), AttributeValue::S(record.file_key.clone())),
        ("timestamp".to_string(), AttributeValue::S(record.timestamp.clone())),
        ("bucket_name".to_string(), AttributeValue::S(record.bucket_name.clone())),
        ("file_size".to_string(), AttributeValue::N(record.file_size.to_string())),
        ("content_type".to_string(), AttributeValue::S(record.content_type.clone())),
        ("last_modified".to_string(), AttributeValue::S(record.last_modified.clone())),
        ("etag".to_string(), AttributeValue::S(record.etag.clone())),
        ("event_name".to_string(), AttributeValue::S(record.event_name.clone())),
        ("processed_at".to_string(), AttributeValue::S(record.processed_at.clone())),
    ]);

    if let Some(preview) = record.content_preview.as_ref() {
        item.insert(
            "content_preview".to_string(),
            AttributeValue::S(preview.clone()),
        );
    }

    item
}

/// Writes the summary record, replacing any record with the same key and timestamp
#[tracing::instrument(skip(client, record), fields(file_key = %record.file_key))]
pub(crate) async fn put_upload_summary(
    client: &Client,
    table: &str,
    record: &UploadSummaryRecord,
) -> anyhow::Result<()> {
    client
        .put_item()
        .table_name(table)
        .set_item(Some(to_item(record)))
        .send()
        .await
        .context(format!(
            "failed to insert upload summary for {} into DynamoDB",
            record.file_key
        ))?;

    Ok(())
}
