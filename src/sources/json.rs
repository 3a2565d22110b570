use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::{errors::OptionsError, models::connections::ConnectionOptions};

use super::OptionsSource;

/// Name of the section holding the options inside a larger settings file.
pub const SECTION: &str = "DBConnection";

#[derive(Debug, Deserialize)]
struct OptionsOverlay {
    #[serde(rename = "DbType", alias = "db_type")]
    db_type: Option<String>,
    #[serde(rename = "ConnectionStrings", alias = "connection_string")]
    connection_string: Option<String>,
}

/// Reads options from a JSON document.
///
/// The keys are looked up in a `DBConnection` object when the document has
/// one, otherwise at the root:
///
/// ```json
/// { "DBConnection": { "DbType": "MySql", "ConnectionStrings": "Server=db" } }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    optional: bool,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            optional: false,
        }
    }

    /// A missing file leaves the options untouched instead of failing.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Overlays the values found in `document` onto `options`.
///
/// A leading byte order mark is ignored. The options must be a JSON object.
pub fn apply_str(
    document: &str,
    mut options: ConnectionOptions,
) -> Result<ConnectionOptions, OptionsError> {
    let document = document.strip_prefix('\u{feff}').unwrap_or(document);
    let mut root: Value = serde_json::from_str(document)?;
    let section = if root.get(SECTION).is_some() {
        root[SECTION].take()
    } else {
        root
    };
    if !section.is_object() {
        return Err(OptionsError::Config(format!(
            "connection options must be a JSON object, found {section}"
        )));
    }
    let overlay: OptionsOverlay = serde_json::from_value(section)?;

    if let Some(db_type) = overlay.db_type {
        options.db_type = db_type;
    }
    if let Some(connection_string) = overlay.connection_string {
        options.connection_string = connection_string;
    }
    Ok(options)
}

impl OptionsSource for JsonFileSource {
    fn name(&self) -> &str {
        "json file"
    }

    fn apply(&self, options: ConnectionOptions) -> Result<ConnectionOptions, OptionsError> {
        let document = match fs::read_to_string(&self.path) {
            Ok(document) => document,
            Err(e) if self.optional && e.kind() == ErrorKind::NotFound => {
                debug!("Skipping missing {}", self.path.display());
                return Ok(options);
            }
            Err(source) => {
                return Err(OptionsError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        debug!("Reading connection options from {}", self.path.display());
        apply_str(&document, options)
    }
}
