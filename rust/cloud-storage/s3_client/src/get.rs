use anyhow::Context;
use aws_sdk_s3 as s3;

/// S3 rejects a range request against an empty object with this status
const RANGE_NOT_SATISFIABLE: u16 = 416;

/// Gets at most the first `len` bytes of the given item from the bucket
#[tracing::instrument(skip(client))]
pub(crate) async fn get_range(
    client: &s3::Client,
    bucket: &str,
    key: &str,
    len: u64,
) -> anyhow::Result<Vec<u8>> {
    if len == 0 {
        return Ok(Vec::new());
    }

    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .range(format!("bytes=0-{}", len - 1))
        .send()
        .await;

    let resp = match resp {
        Ok(resp) => resp,
        Err(e)
            if e.raw_response().map(|r| r.status().as_u16()) == Some(RANGE_NOT_SATISFIABLE) =>
        {
            tracing::trace!("object is empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).context(format!("could not get item {key} from bucket {bucket}"));
        }
    };

    // the range header is only a hint, stop reading once `len` bytes are buffered
    let limit = usize::try_from(len).unwrap_or(usize::MAX);
    let mut body = resp.body;
    let mut bytes = Vec::new();
    while bytes.len() < limit {
        match body.try_next().await.context("could not read body")? {
            Some(chunk) => bytes.extend_from_slice(&chunk),
            None => break,
        }
    }
    bytes.truncate(limit);

    Ok(bytes)
}
