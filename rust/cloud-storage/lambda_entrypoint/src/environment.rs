use std::str::FromStr;
use thiserror::Error;

const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Where the lambda is running, read from the `ENVIRONMENT` variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// `prod`
    Production,
    /// `dev`
    Develop,
    /// `local`, e.g. under `cargo lambda watch`
    Local,
}

/// An error which can occur when constructing an [Environment]
#[derive(Debug, Error)]
pub enum EnvironmentErr {
    /// the variable is unset or not unicode
    #[error("could not read {ENVIRONMENT_VAR}: {0}")]
    VarErr(#[from] std::env::VarError),
    /// the variable holds something other than `prod`, `dev` or `local`
    #[error(transparent)]
    InvalidValue(#[from] UnknownValue),
}

/// A value of `ENVIRONMENT` that is not recognized
#[derive(Debug, Error)]
#[error("Could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl Environment {
    /// Read the [Environment] from the `ENVIRONMENT` variable
    pub fn new_from_env() -> Result<Self, EnvironmentErr> {
        Ok(std::env::var(ENVIRONMENT_VAR)?.parse()?)
    }

    /// like [Environment::new_from_env], defaulting to production when the variable is missing or invalid
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownValue(s.to_string())),
        }
    }
}
