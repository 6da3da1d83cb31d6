#![recursion_limit = "256"]
use std::sync::Arc;

use anyhow::Context as _;
use lambda_entrypoint::LambdaEntrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use upload_summary_handler::{
    config::Config,
    context::Context,
    handler::handler,
    service::{self, time::DefaultTime},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    LambdaEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    tracing::trace!(table=%config.upload_summary_table, "initialized config");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let s3_client = service::s3::S3::new(s3_client::S3::new(aws_sdk_s3::Client::new(&aws_config)));

    tracing::trace!("initialized s3 client");

    let dynamodb_client =
        dynamodb_client::DynamodbClient::new(&aws_config, &config.upload_summary_table);
    let db_client = service::db::DB::new(dynamodb_client.upload_summary);

    tracing::trace!("initialized dynamodb client");

    let ctx = Context {
        s3_client: Arc::new(s3_client),
        db_client: Arc::new(db_client),
        time: Arc::new(DefaultTime),
    };

    let func = service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let ctx = ctx.clone();
        async move { handler(ctx, event).await }
    });

    run(func).await
}
