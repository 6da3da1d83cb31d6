#![deny(missing_docs)]
//! Standardized initialization for lambda binaries.
//! Every lambda `main` should call [LambdaEntrypoint::init] before doing anything else so that
//! logs share one format per [Environment].

use tracing_subscriber::EnvFilter;

mod environment;

pub use environment::{Environment, EnvironmentErr, UnknownValue};

/// The shape of the log lines a binary emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// multi-line, coloured output for reading in a terminal
    Pretty,
    /// one flattened json object per event, for cloudwatch
    Json,
}

impl From<Environment> for LogFormat {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Local => LogFormat::Pretty,
            Environment::Production | Environment::Develop => LogFormat::Json,
        }
    }
}

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct LambdaEntrypoint {
    format: LogFormat,
}

impl Default for LambdaEntrypoint {
    fn default() -> Self {
        Self::new(Environment::new_or_prod())
    }
}

/// sentinel struct which guarantees that we called [LambdaEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl LambdaEntrypoint {
    /// create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self {
            format: env.into(),
        }
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_file(true)
            .with_line_number(true);

        match self.format {
            LogFormat::Pretty => builder.with_ansi(true).pretty().init(),
            // lambda already stamps each line with the request id, keep the payload flat
            LogFormat::Json => builder
                .with_ansi(false)
                .without_time()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init(),
        }

        InitializedEntrypoint(())
    }
}
