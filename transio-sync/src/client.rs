//! translation.io sync client.
//!
//! Builds the JSON payloads, performs the HTTPS exchange through a
//! [`Transport`] capability, and decodes the service response. One attempt
//! per invocation; transport and protocol failures are terminal.
//!
//! Wire-format notes, kept verbatim for compatibility with the service:
//! - the protocol revision travels as `gem_version`
//! - the `purge` flag is the string `"true"`/`"false"`, never a JSON boolean

use std::path::Path;
use std::time::Duration;

use serde_json::{json, Map, Value};
use url::Url;

use transio_core::{Config, Locale, SyncMode};

use crate::error::{io_err, protocol_err, transport_err, SyncError};

/// Response key prefix marking a translated catalog body.
pub const PO_DATA_PREFIX: &str = "po_data_";

/// Overall timeout applied to every HTTP exchange.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Decoded sync response: response keys to JSON values.
///
/// Keys outside the `po_data_<locale>` family are reserved for future
/// service fields and pass through untouched.
pub type SyncResponse = Map<String, Value>;

// ---------------------------------------------------------------------------
// Transport capability
// ---------------------------------------------------------------------------

/// Minimal HTTP capability: POST a JSON body, get back the response body.
///
/// Implementations send `Content-Type: application/json` and
/// `Accept: application/json`, treat any non-success status as a failure,
/// and release the connection handle on every exit path.
pub trait Transport {
    fn post_json(&self, url: &Url, body: &Value) -> Result<String, SyncError>;
}

/// Production [`Transport`] over a blocking [`ureq::Agent`].
pub struct HttpsTransport {
    agent: ureq::Agent,
}

impl HttpsTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
        }
    }
}

impl Default for HttpsTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpsTransport {
    fn post_json(&self, url: &Url, body: &Value) -> Result<String, SyncError> {
        let response = self
            .agent
            .post(url.as_str())
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .send_json(body)
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => {
                    transport_err(url.as_str(), format!("service returned status {code}"))
                }
                ureq::Error::Transport(t) => transport_err(url.as_str(), t.to_string()),
            })?;

        response
            .into_string()
            .map_err(|e| transport_err(url.as_str(), format!("unreadable response body: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Endpoint
// ---------------------------------------------------------------------------

/// `https://<hostname>/api/projects/<api_key>/<action>`
///
/// The api key is pushed as a single path segment, so reserved characters
/// are percent-escaped and double slashes cannot occur.
fn project_url(config: &Config, action: &str) -> Result<Url, SyncError> {
    let mut url = Url::parse(&format!("https://{}", config.hostname))
        .map_err(|e| transport_err(config.hostname.as_str(), format!("invalid service host: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| transport_err(config.hostname.as_str(), "invalid service host"))?
        .extend(["api", "projects", config.api_key.0.as_str(), action]);
    Ok(url)
}

// ---------------------------------------------------------------------------
// Sync
// ---------------------------------------------------------------------------

/// Upload the source catalog and fetch per-locale translations.
pub fn sync<T: Transport>(
    transport: &T,
    config: &Config,
    catalog_text: &str,
    mode: SyncMode,
) -> Result<SyncResponse, SyncError> {
    let purge = if mode.purge() { "true" } else { "false" };
    let body = json!({
        "target_languages": config.target_locales,
        "pot_data": catalog_text,
        "gem_version": config.client_version,
        "source_language": config.source_locale,
        "purge": purge,
    });

    let url = project_url(config, "sync")?;
    tracing::debug!("POST {url}");
    let response_body = transport.post_json(&url, &body)?;
    decode_response(&response_body)
}

/// Parse a sync response body.
///
/// The body must be a JSON object, and every `po_data_<locale>` entry must
/// be a string.
fn decode_response(body: &str) -> Result<SyncResponse, SyncError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| protocol_err(format!("response is not valid JSON: {e}")))?;
    let Value::Object(object) = value else {
        return Err(protocol_err("response is not a JSON object"));
    };

    for (key, entry) in &object {
        if key.starts_with(PO_DATA_PREFIX) && !entry.is_string() {
            return Err(protocol_err(format!("catalog entry '{key}' is not a string")));
        }
    }
    Ok(object)
}

// ---------------------------------------------------------------------------
// Init
// ---------------------------------------------------------------------------

/// Initialize the remote project.
///
/// Catalogs already present under `po_path` seed the project; locales
/// without a local catalog are sent as empty placeholders. The response
/// body is not interpreted, and the payload carries no `purge` key.
pub fn init<T: Transport>(transport: &T, config: &Config) -> Result<(), SyncError> {
    let mut params = Map::new();
    params.insert("target_languages".to_owned(), json!(config.target_locales));
    params.insert("gem_version".to_owned(), json!(config.client_version));
    params.insert("source_language".to_owned(), json!(config.source_locale));
    for locale in &config.target_locales {
        let seed = existing_catalog(&config.po_path, locale)?;
        params.insert(format!("{PO_DATA_PREFIX}{locale}"), json!(seed));
    }

    let url = project_url(config, "init")?;
    tracing::debug!("POST {url}");
    transport.post_json(&url, &Value::Object(params))?;
    Ok(())
}

/// Content of `<po_path>/<locale>.po` when present, empty string otherwise.
fn existing_catalog(po_path: &Path, locale: &Locale) -> Result<String, SyncError> {
    let path = po_path.join(format!("{locale}.po"));
    if !path.exists() {
        return Ok(String::new());
    }
    std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
