use log::debug;

use crate::{errors::OptionsError, models::connections::ConnectionOptions};

pub mod env;
pub mod json;

pub use env::EnvSource;
pub use json::JsonFileSource;

/// Somewhere connection options can be read from.
///
/// A source overlays the values it defines and passes the rest through.
pub trait OptionsSource {
    fn name(&self) -> &str;
    fn apply(&self, options: ConnectionOptions) -> Result<ConnectionOptions, OptionsError>;
}

/// Applies `sources` in order on top of the defaults. Later sources win.
pub fn load(sources: &[&dyn OptionsSource]) -> Result<ConnectionOptions, OptionsError> {
    sources
        .iter()
        .try_fold(ConnectionOptions::default(), |options, source| {
            debug!("Applying connection options from {}", source.name());
            source.apply(options)
        })
}
