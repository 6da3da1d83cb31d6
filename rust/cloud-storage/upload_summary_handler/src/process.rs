use lambda_runtime::tracing;
use models_upload_summary::{UploadSummaryRecord, iso_timestamp};

use crate::{
    context::Context,
    error::ProcessError,
    model::event::UploadNotification,
    service::{metadata::resolve_metadata, preview::fetch_preview},
};

/// Builds the summary record for a single notification and stores it.
///
/// Metadata and preview failures degrade to defaults; a failed write is returned to the caller.
#[tracing::instrument(
    skip(ctx, notification),
    fields(key = %notification.key, bucket = %notification.bucket)
)]
pub async fn process_record(
    ctx: &Context,
    notification: &UploadNotification,
) -> Result<UploadSummaryRecord, ProcessError> {
    tracing::info!(
        "processing {} for object {} in bucket {}",
        notification.event_name,
        notification.key,
        notification.bucket
    );

    let now = ctx.time.now();

    let metadata = resolve_metadata(
        &ctx.s3_client,
        &notification.bucket,
        &notification.key,
        now,
    )
    .await;

    let content_preview = fetch_preview(
        &ctx.s3_client,
        &notification.bucket,
        &notification.key,
        &metadata.content_type,
    )
    .await;

    let timestamp = iso_timestamp(now);
    let record = UploadSummaryRecord {
        file_key: notification.key.clone(),
        timestamp: timestamp.clone(),
        bucket_name: notification.bucket.clone(),
        file_size: notification.size,
        content_type: metadata.content_type,
        last_modified: metadata.last_modified,
        etag: metadata.etag,
        event_name: notification.event_name.clone(),
        processed_at: timestamp,
        content_preview,
    };

    ctx.db_client
        .put_upload_summary(&record)
        .await
        .map_err(|source| {
            let err = ProcessError::Persistence {
                key: notification.key.clone(),
                source,
            };
            tracing::error!(error=%err, "error storing upload summary");
            err
        })?;

    tracing::info!("successfully stored upload summary");

    Ok(record)
}
