//! Domain types for a catalog sync run.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths. A [`Config`] is built once per invocation by
//! [`crate::config::resolve`] and discarded afterwards.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Wire constants
// ---------------------------------------------------------------------------

/// Client protocol revision. Sent as `gem_version` on the wire — the field
/// name is kept for backward compatibility with the service.
pub const CLIENT_VERSION: &str = "2.0";

/// Service endpoint host.
pub const SERVICE_HOST: &str = "translation.io";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A language/region identifier string (e.g. `fr`, `de`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale(pub String);

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Locale {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Opaque project identifier. Forwarded to the service as a URL path
/// segment, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiKey(pub String);

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Sync mode
// ---------------------------------------------------------------------------

/// Operation mode for a catalog sync run.
///
/// Purge is a boolean modifier of the sync operation, not a separate
/// endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Upload the source catalog and fetch translations.
    Sync,
    /// Sync, additionally marking keys absent from the uploaded catalog for
    /// removal on the service.
    SyncAndPurge,
}

impl SyncMode {
    /// Value of the purge modifier.
    pub fn purge(self) -> bool {
        matches!(self, SyncMode::SyncAndPurge)
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Validated build-pipeline configuration for one sync invocation.
///
/// Only complete configurations exist: every required field is present and
/// non-empty, enforced by [`crate::config::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Extracted source catalog (POT file) uploaded as `pot_data`.
    pub pot_path: PathBuf,
    /// Directory receiving one `<locale>.po` file per returned locale.
    pub po_path: PathBuf,
    pub api_key: ApiKey,
    /// Locales translations are requested for; order is preserved on the wire.
    pub target_locales: Vec<Locale>,
    pub source_locale: Locale,
    /// Client protocol revision, [`CLIENT_VERSION`].
    pub client_version: String,
    /// Service endpoint host, [`SERVICE_HOST`].
    pub hostname: String,
    /// Shell command run before sync by the composite pipeline step.
    pub extract_command: Option<String>,
    /// Shell command run after sync by the composite pipeline step.
    pub compile_command: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
