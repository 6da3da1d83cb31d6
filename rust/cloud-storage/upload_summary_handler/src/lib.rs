#![recursion_limit = "256"]
pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod model;
pub mod process;
pub mod service;
