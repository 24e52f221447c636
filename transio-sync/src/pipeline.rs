//! Canonical sync/init entry points composing client and writer.

use chrono::{DateTime, Utc};

use transio_core::{Config, SyncMode};

use crate::client::{self, Transport};
use crate::error::{io_err, SyncError};
use crate::writer::{self, HeaderMode, WrittenCatalog};

/// Outcome of a completed sync run.
#[derive(Debug)]
pub struct SyncOutcome {
    pub catalogs: Vec<WrittenCatalog>,
    pub synced_at: DateTime<Utc>,
}

/// Upload the source catalog and materialize the returned translations.
///
/// The source catalog is read before any network activity, so a missing POT
/// file never reaches the service. On transport or protocol failure no file
/// is touched.
pub fn run<T: Transport>(
    transport: &T,
    config: &Config,
    mode: SyncMode,
) -> Result<SyncOutcome, SyncError> {
    let synced_at = Utc::now();
    let catalog_text = std::fs::read_to_string(&config.pot_path)
        .map_err(|e| io_err(&config.pot_path, e))?;

    tracing::debug!(
        "uploading {} ({} bytes, purge={})",
        config.pot_path.display(),
        catalog_text.len(),
        mode.purge()
    );
    let response = client::sync(transport, config, &catalog_text, mode)?;
    let catalogs = writer::write_catalogs(&response, &config.po_path, HeaderMode::LanguageLine)?;
    tracing::info!(
        "synced {} catalog(s) into {}",
        catalogs.len(),
        config.po_path.display()
    );

    Ok(SyncOutcome { catalogs, synced_at })
}

/// Initialize the remote project from the local configuration.
pub fn init<T: Transport>(transport: &T, config: &Config) -> Result<(), SyncError> {
    client::init(transport, config)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use serde_json::Value;
    use tempfile::TempDir;
    use url::Url;

    use crate::error::transport_err;

    use super::*;

    struct CannedTransport {
        reply: Result<String, String>,
        called: Cell<bool>,
    }

    impl CannedTransport {
        fn replying(body: &str) -> Self {
            Self {
                reply: Ok(body.to_owned()),
                called: Cell::new(false),
            }
        }

        fn failing(detail: &str) -> Self {
            Self {
                reply: Err(detail.to_owned()),
                called: Cell::new(false),
            }
        }
    }

    impl Transport for CannedTransport {
        fn post_json(&self, url: &Url, _body: &Value) -> Result<String, SyncError> {
            self.called.set(true);
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(detail) => Err(transport_err(url.as_str(), detail.clone())),
            }
        }
    }

    fn config_in(dir: &TempDir) -> Config {
        Config {
            pot_path: dir.path().join("messages.pot"),
            po_path: dir.path().join("locales"),
            api_key: "abc123".into(),
            target_locales: vec!["fr".into(), "de".into()],
            source_locale: "en".into(),
            client_version: "2.0".to_owned(),
            hostname: "translation.io".to_owned(),
            extract_command: None,
            compile_command: None,
        }
    }

    #[test]
    fn sync_round_trip_writes_returned_catalogs() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = TempDir::new().expect("tempdir");
        let config = config_in(&dir);
        std::fs::write(&config.pot_path, "msgid \"hi\"\n").expect("write pot");

        let transport =
            CannedTransport::replying(r#"{"po_data_fr":"msgstr_fr","po_data_de":"msgstr_de"}"#);
        let outcome = run(&transport, &config, SyncMode::Sync).expect("run");

        assert_eq!(outcome.catalogs.len(), 2);
        let fr = std::fs::read_to_string(config.po_path.join("fr.po")).expect("fr.po");
        assert_eq!(fr, "\"Language: fr\nmsgstr_fr");
        let de = std::fs::read_to_string(config.po_path.join("de.po")).expect("de.po");
        assert_eq!(de, "\"Language: de\nmsgstr_de");
    }

    #[test]
    fn missing_pot_file_fails_before_any_network_activity() {
        let dir = TempDir::new().expect("tempdir");
        let config = config_in(&dir);

        let transport = CannedTransport::replying("{}");
        let err = run(&transport, &config, SyncMode::Sync).unwrap_err();

        assert!(matches!(err, SyncError::Io { .. }), "got {err:?}");
        assert!(!transport.called.get(), "no POST may happen without a POT file");
    }

    #[test]
    fn transport_failure_writes_no_files() {
        let dir = TempDir::new().expect("tempdir");
        let config = config_in(&dir);
        std::fs::write(&config.pot_path, "msgid \"hi\"\n").expect("write pot");

        let transport = CannedTransport::failing("connection refused");
        let err = run(&transport, &config, SyncMode::Sync).unwrap_err();

        assert!(matches!(err, SyncError::Transport { .. }), "got {err:?}");
        assert!(!config.po_path.exists(), "writer must not run after a transport error");
    }
}
