//! Error types for transio-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration key is absent, or present but empty.
    #[error("missing configuration key '{key}'")]
    MissingKey { key: &'static str },

    /// The extraction mapping names more than one output catalog; only
    /// single-output configurations are supported.
    #[error("configuration key '{key}' maps {count} output files, expected exactly one")]
    MultipleExtractionTargets { key: &'static str, count: usize },

    /// The configuration file could not be read.
    #[error("cannot read configuration at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML.
    #[error("failed to parse configuration at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
