use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading and validating connection options.
#[derive(Error, Debug)]
pub enum OptionsError {
    /// The database kind is not one of the known selectors.
    #[error("Invalid database kind: {0:?}")]
    InvalidDatabaseKind(String),
    /// The connection string is empty or only whitespace.
    #[error("Connection string is empty")]
    EmptyConnectionString,
    /// A configuration file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A configuration document could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}
