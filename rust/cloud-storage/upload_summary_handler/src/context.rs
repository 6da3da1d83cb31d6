use std::sync::Arc;

use crate::service::{self, time::TimeGetter};

#[derive(Clone)]
pub struct Context {
    pub s3_client: Arc<service::s3::S3>,
    pub db_client: Arc<service::db::DB>,
    pub time: Arc<dyn TimeGetter>,
}
