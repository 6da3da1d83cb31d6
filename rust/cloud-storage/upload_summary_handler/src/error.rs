use thiserror::Error;

/// Everything that can go wrong while turning a notification into a summary record.
///
/// [ProcessError::MetadataFetch] and [ProcessError::ContentFetch] are recovered from per record,
/// the remaining variants abort the whole batch.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The payload or one of its records is not shaped like an S3 notification
    #[error("malformed notification event: {0}")]
    MalformedEvent(String),
    /// The object head could not be fetched
    #[error("failed to get metadata for {key}: {source:#}")]
    MetadataFetch {
        key: String,
        #[source]
        source: anyhow::Error,
    },
    /// The object body could not be read for a preview
    #[error("failed to read content of {key}: {source:#}")]
    ContentFetch {
        key: String,
        #[source]
        source: anyhow::Error,
    },
    /// The summary record could not be written
    #[error("failed to store upload summary for {key}: {source:#}")]
    Persistence {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}
