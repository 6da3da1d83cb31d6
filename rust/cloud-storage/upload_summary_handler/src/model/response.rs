use serde::Serialize;
use serde_json::json;

use crate::error::ProcessError;

/// The value returned to the lambda runtime for every invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// json encoded body
    pub body: String,
}

impl SummaryResponse {
    pub const OK: u16 = 200;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;

    /// Every record was stored. `processed_files` holds the keys as they were received.
    pub fn success(processed_files: Vec<String>) -> Self {
        let body = json!({
            "message": format!("Successfully processed {} records", processed_files.len()),
            "processed_files": processed_files,
        });

        Self {
            status_code: Self::OK,
            body: body.to_string(),
        }
    }

    pub fn failure(err: &ProcessError) -> Self {
        let body = json!({
            "error": err.to_string(),
            "message": "Failed to process S3 event",
        });

        Self {
            status_code: Self::INTERNAL_SERVER_ERROR,
            body: body.to_string(),
        }
    }
}
