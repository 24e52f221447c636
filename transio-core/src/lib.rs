//! transio core library — domain types, configuration resolution, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes, [`SyncMode`], [`Config`], wire constants
//! - [`error`] — [`ConfigError`]
//! - [`config`] — [`ConfigSource`] lookup capability, [`YamlSource`], [`resolve`]

pub mod config;
pub mod error;
pub mod types;

pub use config::{resolve, ConfigSource, YamlSource};
pub use error::ConfigError;
pub use types::{ApiKey, Config, Locale, SyncMode, CLIENT_VERSION, SERVICE_HOST};
