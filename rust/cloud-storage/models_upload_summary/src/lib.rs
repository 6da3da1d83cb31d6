//! Types shared between the upload summary lambda and the clients that read and write them.

use chrono::{DateTime, Timelike, Utc};

/// Value stored when the content type or etag of an object could not be determined
pub const UNKNOWN: &str = "unknown";

/// Stored in place of a content preview when the object body could not be read
pub const PREVIEW_UNAVAILABLE: &str = "Could not read content";

/// Formats a timestamp as ISO-8601 without an offset, e.g. `2024-05-01T12:30:00.250000`.
/// The fraction is left out entirely when it is zero.
pub fn iso_timestamp(time: DateTime<Utc>) -> String {
    if time.nanosecond() / 1_000 == 0 {
        time.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        time.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// The metadata resolved for an uploaded object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetadata {
    pub content_type: String,
    pub last_modified: String,
    pub etag: String,
}

impl ObjectMetadata {
    /// Metadata used when the object head could not be fetched
    pub fn unavailable(now: DateTime<Utc>) -> Self {
        Self {
            content_type: UNKNOWN.to_string(),
            last_modified: iso_timestamp(now),
            etag: UNKNOWN.to_string(),
        }
    }
}

/// A summary of a single uploaded object.
///
/// `file_key` is the partition key and `timestamp` the sort key of the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSummaryRecord {
    pub file_key: String,
    pub timestamp: String,
    pub bucket_name: String,
    pub file_size: i64,
    pub content_type: String,
    pub last_modified: String,
    pub etag: String,
    pub event_name: String,
    pub processed_at: String,
    pub content_preview: Option<String>,
}
