pub mod db;
pub mod metadata;
pub mod preview;
pub mod s3;
pub mod time;
