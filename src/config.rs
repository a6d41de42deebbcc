use std::env;
use thiserror::Error;

/// Environment variable naming the DynamoDB table.
pub const TABLE_NAME: &str = "TABLE_NAME";

/// Errors raised while reading the configuration.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("environment variable {0} is not set")]
    MissingVariable(&'static str),
}

/// Runtime configuration of the function.
///
/// AWS credentials, region and endpoint overrides are read by `aws-config`, not here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The table holding todo records.
    pub table_name: String,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = lookup(TABLE_NAME)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVariable(TABLE_NAME))?;
        Ok(Self { table_name })
    }
}
