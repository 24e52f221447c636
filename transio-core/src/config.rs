//! Build-pipeline configuration resolution.
//!
//! # Key layout (YAML, dotted-path lookup)
//!
//! ```yaml
//! extract:
//!   pot:
//!     files:
//!       "po/messages.pot": ["src/**/*.rs"]
//! translation:
//!   po_path: "po"
//!   api_key: "abc123"
//!   target_locales: ["fr", "de"]
//!   source_locale: "en"
//! hooks:
//!   extract: "xtr src/main.rs -o po/messages.pot"   # optional
//!   compile: "msgfmt po/fr.po -o po/fr.mo"          # optional
//! ```
//!
//! [`resolve`] takes the lookup as an explicit [`ConfigSource`] capability so
//! it can be driven by any configuration carrier; [`YamlSource`] is the
//! file-backed production source. Required keys are checked in a fixed order
//! and the first missing one fails the whole resolution — a [`Config`] is
//! never partially constructed. Present-but-empty values count as missing.

use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::ConfigError;
use crate::types::{ApiKey, Config, Locale, CLIENT_VERSION, SERVICE_HOST};

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Extraction output mapping: output POT path → input file patterns.
pub const KEY_POT_FILES: &str = "extract.pot.files";
/// Directory for per-locale output catalogs.
pub const KEY_PO_PATH: &str = "translation.po_path";
/// Opaque project identifier.
pub const KEY_API_KEY: &str = "translation.api_key";
/// Locales to request translations for.
pub const KEY_TARGET_LOCALES: &str = "translation.target_locales";
/// Locale of the source catalog.
pub const KEY_SOURCE_LOCALE: &str = "translation.source_locale";
/// Optional shell command run before sync.
pub const KEY_EXTRACT_HOOK: &str = "hooks.extract";
/// Optional shell command run after sync.
pub const KEY_COMPILE_HOOK: &str = "hooks.compile";

// ---------------------------------------------------------------------------
// Lookup capability
// ---------------------------------------------------------------------------

/// Lookup capability over the build pipeline's configuration.
pub trait ConfigSource {
    /// Value at `key` (dotted path), or `None` when unset.
    fn get(&self, key: &str) -> Option<Value>;
}

/// File-backed [`ConfigSource`] over a parsed YAML document.
#[derive(Debug, Clone)]
pub struct YamlSource {
    root: Value,
}

impl YamlSource {
    /// Load and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let root = serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self { root })
    }

    /// Parse an in-memory YAML document.
    pub fn parse(contents: &str) -> Result<Self, serde_yaml::Error> {
        Ok(Self {
            root: serde_yaml::from_str(contents)?,
        })
    }
}

impl ConfigSource for YamlSource {
    fn get(&self, key: &str) -> Option<Value> {
        let mut node = &self.root;
        for part in key.split('.') {
            node = node.get(part)?;
        }
        Some(node.clone())
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve and validate a [`Config`] from the supplied source.
///
/// Checks the required keys in a fixed order (extraction mapping, po path,
/// api key, target locales, source locale); the first missing key aborts
/// with a [`ConfigError`] naming it and nothing after it is checked.
pub fn resolve(source: &dyn ConfigSource) -> Result<Config, ConfigError> {
    let pot_path = resolve_pot_path(source)?;
    let po_path = required_string(source, KEY_PO_PATH)?;
    let api_key = required_string(source, KEY_API_KEY)?;
    let target_locales = required_locales(source, KEY_TARGET_LOCALES)?;
    let source_locale = required_string(source, KEY_SOURCE_LOCALE)?;

    Ok(Config {
        pot_path,
        po_path: PathBuf::from(po_path),
        api_key: ApiKey(api_key),
        target_locales,
        source_locale: Locale(source_locale),
        client_version: CLIENT_VERSION.to_owned(),
        hostname: SERVICE_HOST.to_owned(),
        extract_command: optional_string(source, KEY_EXTRACT_HOOK),
        compile_command: optional_string(source, KEY_COMPILE_HOOK),
    })
}

/// Derive `pot_path` from the extraction-output mapping.
///
/// The mapping must contain exactly one output file; more than one fails
/// loudly rather than silently taking the first.
fn resolve_pot_path(source: &dyn ConfigSource) -> Result<PathBuf, ConfigError> {
    let value = source
        .get(KEY_POT_FILES)
        .ok_or(ConfigError::MissingKey { key: KEY_POT_FILES })?;
    let files = value
        .as_mapping()
        .filter(|m| !m.is_empty())
        .ok_or(ConfigError::MissingKey { key: KEY_POT_FILES })?;

    if files.len() > 1 {
        return Err(ConfigError::MultipleExtractionTargets {
            key: KEY_POT_FILES,
            count: files.len(),
        });
    }

    let output = files
        .keys()
        .next()
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or(ConfigError::MissingKey { key: KEY_POT_FILES })?;
    Ok(PathBuf::from(output))
}

fn required_string(
    source: &dyn ConfigSource,
    key: &'static str,
) -> Result<String, ConfigError> {
    source
        .get(key)
        .and_then(|v| v.as_str().map(str::to_owned))
        .filter(|s| !s.trim().is_empty())
        .ok_or(ConfigError::MissingKey { key })
}

fn required_locales(
    source: &dyn ConfigSource,
    key: &'static str,
) -> Result<Vec<Locale>, ConfigError> {
    let value = source.get(key).ok_or(ConfigError::MissingKey { key })?;
    let entries = value
        .as_sequence()
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingKey { key })?;

    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .filter(|s| !s.trim().is_empty())
                .map(Locale::from)
                .ok_or(ConfigError::MissingKey { key })
        })
        .collect()
}

fn optional_string(source: &dyn ConfigSource, key: &'static str) -> Option<String> {
    source
        .get(key)
        .and_then(|v| v.as_str().map(str::to_owned))
        .filter(|s| !s.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
