use std::env::{self, VarError};

use log::debug;

use crate::{errors::OptionsError, models::connections::ConnectionOptions};

use super::OptionsSource;

pub const DB_TYPE_VAR: &str = "DB_TYPE";
pub const CONNECTION_STRING_VAR: &str = "DB_CONNECTION_STRING";

/// Reads `DB_TYPE` and `DB_CONNECTION_STRING` from the process environment.
///
/// Unset or empty variables leave the corresponding field untouched.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `{prefix}DB_TYPE` and `{prefix}DB_CONNECTION_STRING` instead.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn db_type_var(&self) -> String {
        format!("{}{}", self.prefix, DB_TYPE_VAR)
    }

    pub fn connection_string_var(&self) -> String {
        format!("{}{}", self.prefix, CONNECTION_STRING_VAR)
    }
}

fn lookup(key: &str) -> Result<Option<String>, OptionsError> {
    match env::var(key) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => {
            debug!("Using {key} from environment");
            Ok(Some(value))
        }
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(OptionsError::Config(format!(
            "{key} is not valid unicode"
        ))),
    }
}

impl OptionsSource for EnvSource {
    fn name(&self) -> &str {
        "environment"
    }

    fn apply(&self, mut options: ConnectionOptions) -> Result<ConnectionOptions, OptionsError> {
        if let Some(db_type) = lookup(&self.db_type_var())? {
            options.db_type = db_type;
        }
        if let Some(connection_string) = lookup(&self.connection_string_var())? {
            options.connection_string = connection_string;
        }
        Ok(options)
    }
}
