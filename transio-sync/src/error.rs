//! Error types for transio-sync.

use std::path::PathBuf;

use thiserror::Error;

use transio_core::ConfigError;

/// All errors that can arise from sync operations. Each is terminal for the
/// current invocation: no retry, no fallback host, no partial recovery.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Configuration resolution failed before any network activity.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP exchange could not be completed (connection, TLS, DNS,
    /// non-success status, unreadable body).
    #[error("transport error for {url}: {detail}")]
    Transport { url: String, detail: String },

    /// The response body does not match the service contract.
    #[error("protocol error: {detail}")]
    Protocol { detail: String },

    /// Local catalog read or per-locale write failed, with annotated path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`SyncError::Transport`].
pub(crate) fn transport_err(url: impl Into<String>, detail: impl Into<String>) -> SyncError {
    SyncError::Transport {
        url: url.into(),
        detail: detail.into(),
    }
}

/// Convenience constructor for [`SyncError::Protocol`].
pub(crate) fn protocol_err(detail: impl Into<String>) -> SyncError {
    SyncError::Protocol {
        detail: detail.into(),
    }
}
