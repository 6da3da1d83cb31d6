use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};

use crate::{
    context::Context,
    error::ProcessError,
    model::{
        event::{UploadNotification, parse_event},
        response::SummaryResponse,
    },
    process::process_record,
};

/// Processes the s3 event. Failures are reported through the response status rather than the
/// lambda error so the caller always receives a body.
#[tracing::instrument(skip(ctx, event))]
pub async fn handler(
    ctx: Context,
    event: LambdaEvent<serde_json::Value>,
) -> Result<SummaryResponse, Error> {
    match process_event(&ctx, event.payload).await {
        Ok(processed_files) => {
            tracing::trace!("processing complete");
            Ok(SummaryResponse::success(processed_files))
        }
        Err(err) => {
            tracing::error!(error=%err, "error processing s3 event");
            Ok(SummaryResponse::failure(&err))
        }
    }
}

/// Processes every record in order and returns the keys as they were received.
/// The first fatal error stops the batch, records before it stay stored.
pub async fn process_event(
    ctx: &Context,
    payload: serde_json::Value,
) -> Result<Vec<String>, ProcessError> {
    let event = parse_event(payload)?;

    tracing::info!(
        "processing s3 records record_count={}",
        event.records.len()
    );

    let mut processed_files = Vec::with_capacity(event.records.len());
    for record in event.records.iter() {
        let notification = UploadNotification::try_from(record)?;
        process_record(ctx, &notification).await?;
        processed_files.push(notification.raw_key);
    }

    Ok(processed_files)
}
