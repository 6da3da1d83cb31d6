use chrono::{DateTime, Utc};
use lambda_runtime::tracing;
use models_upload_summary::{ObjectMetadata, UNKNOWN, iso_timestamp};
use s3_client::ObjectHead;

use crate::{error::ProcessError, service::s3::S3};

/// Fills in whatever the head response left out
pub fn metadata_from_head(head: ObjectHead, now: DateTime<Utc>) -> ObjectMetadata {
    ObjectMetadata {
        content_type: head.content_type.unwrap_or_else(|| UNKNOWN.to_string()),
        last_modified: head
            .last_modified
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| iso_timestamp(now)),
        etag: head
            .e_tag
            .map(|e| e.trim_matches('"').to_string())
            .unwrap_or_default(),
    }
}

/// Resolves the metadata of the object. A failed lookup is logged and replaced with
/// [ObjectMetadata::unavailable].
#[tracing::instrument(skip(s3_client))]
pub async fn resolve_metadata(
    s3_client: &S3,
    bucket: &str,
    key: &str,
    now: DateTime<Utc>,
) -> ObjectMetadata {
    match s3_client.head(bucket, key).await {
        Ok(head) => metadata_from_head(head, now),
        Err(source) => {
            let err = ProcessError::MetadataFetch {
                key: key.to_string(),
                source,
            };
            tracing::error!(error=%err, "error getting object metadata");
            ObjectMetadata::unavailable(now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mockall::predicate::eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn strips_quotes_from_etag() {
        let head = ObjectHead {
            content_type: Some("application/json".to_string()),
            last_modified: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
            e_tag: Some("\"d41d8cd98f00b204e9800998ecf8427e\"".to_string()),
        };

        let metadata = metadata_from_head(head, now());

        assert_eq!(metadata.content_type, "application/json");
        assert_eq!(metadata.last_modified, "2024-05-01T12:00:00+00:00");
        assert_eq!(metadata.etag, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn fills_missing_head_fields() {
        let metadata = metadata_from_head(ObjectHead::default(), now());

        assert_eq!(metadata.content_type, "unknown");
        assert_eq!(metadata.last_modified, "2024-05-01T12:30:00");
        assert_eq!(metadata.etag, "");
    }

    #[tokio::test]
    async fn falls_back_when_head_fails() {
        let mut s3_client = S3::default();
        s3_client
            .expect_head()
            .with(eq("b1"), eq("missing.txt"))
            .return_once(|_, _| Err(anyhow::anyhow!("access denied")));

        let metadata = resolve_metadata(&s3_client, "b1", "missing.txt", now()).await;

        assert_eq!(metadata, ObjectMetadata::unavailable(now()));
    }
}
