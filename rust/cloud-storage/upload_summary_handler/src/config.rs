use anyhow::Context;

/// The configuration parameters for the lambda, pulled from environment variables.
///
/// AWS credentials and region are resolved by the SDK from the lambda runtime environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// The dynamodb table upload summaries are written to
    pub upload_summary_table: String,
}

impl Config {
    pub fn new(upload_summary_table: &str) -> Self {
        Config {
            upload_summary_table: upload_summary_table.to_string(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let upload_summary_table = std::env::var("UPLOAD_SUMMARY_TABLE")
            .context("UPLOAD_SUMMARY_TABLE must be provided")?;
        Ok(Config::new(&upload_summary_table))
    }
}
