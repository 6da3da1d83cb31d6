//! The parts of an S3 notification payload the handler reads.
//!
//! Only the fields that end up in the summary record are modelled; anything else on the payload is
//! ignored.

use serde::Deserialize;

use crate::{error::ProcessError, model::key::decode_object_key};

/// The raw notification payload. Records are kept as json until they are processed so a malformed
/// record only fails once it is reached.
#[derive(Debug, Deserialize)]
pub struct NotificationEvent {
    #[serde(rename = "Records")]
    pub records: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotificationRecord {
    event_name: String,
    s3: S3Entity,
}

#[derive(Debug, Deserialize)]
struct S3Entity {
    bucket: S3Bucket,
    object: S3Object,
}

#[derive(Debug, Deserialize)]
struct S3Bucket {
    name: String,
}

#[derive(Debug, Deserialize)]
struct S3Object {
    key: String,
    size: i64,
}

/// A single upload notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadNotification {
    pub bucket: String,
    /// The key exactly as it appeared in the notification
    pub raw_key: String,
    /// The percent decoded key
    pub key: String,
    pub size: i64,
    pub event_name: String,
}

impl TryFrom<&serde_json::Value> for UploadNotification {
    type Error = ProcessError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let record = NotificationRecord::deserialize(value)
            .map_err(|e| ProcessError::MalformedEvent(e.to_string()))?;

        Ok(Self {
            bucket: record.s3.bucket.name,
            key: decode_object_key(&record.s3.object.key),
            raw_key: record.s3.object.key,
            size: record.s3.object.size,
            event_name: record.event_name,
        })
    }
}

/// Extracts the records of a notification payload
pub fn parse_event(payload: serde_json::Value) -> Result<NotificationEvent, ProcessError> {
    serde_json::from_value(payload).map_err(|e| ProcessError::MalformedEvent(e.to_string()))
}
