pub mod errors;
pub mod models;
pub mod shared;
pub mod sources;

pub use errors::OptionsError;
pub use models::connections::{ConnectionOptions, DbType};
pub use shared::{replace_shared, shared, update_shared, SharedOptions};
pub use sources::{load, EnvSource, JsonFileSource, OptionsSource};
