use anyhow::Context;
use aws_sdk_s3 as s3;
use aws_sdk_s3::primitives::DateTime as SmithyDateTime;
use chrono::{DateTime, Utc};

use crate::ObjectHead;

pub(crate) fn to_utc(time: &SmithyDateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(time.secs(), time.subsec_nanos())
}

/// Performs a head object request for the given key
#[tracing::instrument(skip(client))]
pub(crate) async fn head(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> anyhow::Result<ObjectHead> {
    let resp = client
        .head_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .context(format!("could not head item {key} in bucket {bucket}"))?;

    Ok(ObjectHead {
        content_type: resp.content_type().map(String::from),
        last_modified: resp.last_modified().and_then(to_utc),
        e_tag: resp.e_tag().map(String::from),
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::test_util::{replay_client, response};

    #[test]
    fn converts_subsecond_precision() {
        let time = SmithyDateTime::from_secs_and_nanos(1_714_564_800, 250_000_000);

        assert_eq!(
            to_utc(&time),
            Some(Utc.timestamp_opt(1_714_564_800, 250_000_000).unwrap())
        );
    }

    #[tokio::test]
    async fn reads_head_headers() {
        let client = replay_client(vec![response(
            200,
            &[
                ("Content-Type", "text/csv"),
                ("Last-Modified", "Wed, 01 May 2024 12:00:00 GMT"),
                ("ETag", "\"abc123\""),
                ("Content-Length", "120"),
            ],
            "",
        )]);

        let head = head(&client, "b1", "folder/data.csv").await.unwrap();

        assert_eq!(
            head,
            ObjectHead {
                content_type: Some("text/csv".to_string()),
                last_modified: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
                e_tag: Some("\"abc123\"".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn missing_headers_are_none() {
        let client = replay_client(vec![response(200, &[], "")]);

        let head = head(&client, "b1", "bare").await.unwrap();

        assert_eq!(head, ObjectHead::default());
    }

    #[tokio::test]
    async fn not_found_is_an_error() {
        let client = replay_client(vec![response(404, &[], "")]);

        let err = head(&client, "b1", "missing.txt").await.unwrap_err();

        assert!(
            err.to_string()
                .contains("could not head item missing.txt in bucket b1")
        );
    }
}
