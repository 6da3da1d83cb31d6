use lambda_runtime::tracing;
use models_upload_summary::PREVIEW_UNAVAILABLE;

use crate::{error::ProcessError, service::s3::S3};

/// How many bytes of the object are read to build a preview
pub const PREVIEW_FETCH_BYTES: u64 = 1000;

/// The maximum number of characters kept in a preview
pub const PREVIEW_MAX_CHARS: usize = 500;

const TEXT_MARKERS: [&str; 3] = ["text", "json", "csv"];

/// Whether a preview should be taken for objects of this content type
pub fn is_previewable(content_type: &str) -> bool {
    TEXT_MARKERS
        .iter()
        .any(|marker| content_type.contains(marker))
}

/// Decodes the bytes as UTF-8, dropping invalid sequences, and keeps the first
/// [PREVIEW_MAX_CHARS] characters
pub fn build_preview(bytes: &[u8]) -> String {
    bytes
        .utf8_chunks()
        .flat_map(|chunk| chunk.valid().chars())
        .take(PREVIEW_MAX_CHARS)
        .collect()
}

/// Reads the start of the object and builds a preview from it.
///
/// Returns `None` when the content type is not text-like or the object yields an empty preview.
/// A failed read is logged and yields [PREVIEW_UNAVAILABLE].
#[tracing::instrument(skip(s3_client))]
pub async fn fetch_preview(
    s3_client: &S3,
    bucket: &str,
    key: &str,
    content_type: &str,
) -> Option<String> {
    if !is_previewable(content_type) {
        return None;
    }

    match s3_client.get_range(bucket, key, PREVIEW_FETCH_BYTES).await {
        Ok(bytes) => Some(build_preview(&bytes)).filter(|preview| !preview.is_empty()),
        Err(source) => {
            let err = ProcessError::ContentFetch {
                key: key.to_string(),
                source,
            };
            tracing::warn!(error=%err, "could not read file content");
            Some(PREVIEW_UNAVAILABLE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn text_like_content_types_are_previewable() {
        assert!(is_previewable("text/plain"));
        assert!(is_previewable("text/csv"));
        assert!(is_previewable("application/json"));
        assert!(is_previewable("application/vnd.ms-excel; format=csv"));
        assert!(!is_previewable("image/png"));
        assert!(!is_previewable("unknown"));
        assert!(!is_previewable(""));
    }

    #[test]
    fn marker_match_is_case_sensitive() {
        assert!(!is_previewable("TEXT/PLAIN"));
    }

    #[test]
    fn preview_is_truncated_to_max_chars() {
        let bytes = "é".repeat(600).into_bytes();
        let preview = build_preview(&bytes);
        assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS);
    }

    #[test]
    fn invalid_bytes_are_dropped() {
        let preview = build_preview(b"ab\xffcd\xfe");
        assert_eq!(preview, "abcd");
    }

    #[test]
    fn truncated_trailing_character_is_dropped() {
        // the first byte of "é" without its continuation byte
        let preview = build_preview(b"caf\xC3");
        assert_eq!(preview, "caf");
    }

    #[tokio::test]
    async fn skips_binary_content() {
        let mut s3_client = S3::default();
        s3_client.expect_get_range().never();

        let preview = fetch_preview(&s3_client, "b1", "image.png", "image/png").await;

        assert_eq!(preview, None);
    }

    #[tokio::test]
    async fn reads_first_bytes_of_text_content() {
        let mut s3_client = S3::default();
        s3_client
            .expect_get_range()
            .with(eq("b1"), eq("notes.txt"), eq(PREVIEW_FETCH_BYTES))
            .times(1)
            .return_once(|_, _, _| Ok(b"hello world".to_vec()));

        let preview = fetch_preview(&s3_client, "b1", "notes.txt", "text/plain").await;

        assert_eq!(preview.as_deref(), Some("hello world"));
    }

    #[tokio::test]
    async fn empty_content_has_no_preview() {
        let mut s3_client = S3::default();
        s3_client
            .expect_get_range()
            .return_once(|_, _, _| Ok(Vec::new()));

        let preview = fetch_preview(&s3_client, "b1", "empty.txt", "text/plain").await;

        assert_eq!(preview, None);
    }

    #[tokio::test]
    async fn failed_read_yields_placeholder() {
        let mut s3_client = S3::default();
        s3_client
            .expect_get_range()
            .return_once(|_, _, _| Err(anyhow::anyhow!("slow down")));

        let preview = fetch_preview(&s3_client, "b1", "data.json", "application/json").await;

        assert_eq!(preview.as_deref(), Some("Could not read content"));
    }
}
