//! Per-locale catalog materialization.
//!
//! ## Write protocol
//!
//! 1. Filter response keys to the `po_data_<locale>` family.
//! 2. Compute `<po_path>/<locale>.po`.
//! 3. Prefix the body per [`HeaderMode`].
//! 4. Create parent directories, write `<path>.po.tmp`, rename into place.
//!
//! Writes are unconditional overwrites: no diffing against the previous
//! file, so running the writer twice with the same response yields the same
//! final contents. A failure part-way leaves earlier locales written — no
//! rollback.

use std::path::{Path, PathBuf};

use transio_core::Locale;

use crate::client::{SyncResponse, PO_DATA_PREFIX};
use crate::error::{io_err, SyncError};

/// Header handling for written catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// Prepend the opening quoted gettext header line,
    /// `"Language: <locale>` followed by a newline. The service returns
    /// catalog bodies that continue the quoted header block.
    LanguageLine,
    /// Write the body exactly as returned.
    Verbatim,
}

/// A catalog file produced by [`write_catalogs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenCatalog {
    pub locale: Locale,
    pub path: PathBuf,
}

/// Write one `<locale>.po` file per `po_data_<locale>` response entry.
///
/// Keys outside that family — including the bare `po_data` — are silently
/// skipped, keeping the writer forward-compatible with unknown response
/// fields. Entries are processed in sorted key order, so a failure leaves a
/// predictable prefix of locales on disk.
pub fn write_catalogs(
    response: &SyncResponse,
    po_path: &Path,
    header: HeaderMode,
) -> Result<Vec<WrittenCatalog>, SyncError> {
    let mut written = Vec::new();
    for (key, value) in response {
        let Some(locale) = key.strip_prefix(PO_DATA_PREFIX).filter(|l| !l.is_empty()) else {
            continue;
        };
        let Some(body) = value.as_str() else {
            continue;
        };

        let path = po_path.join(format!("{locale}.po"));
        let content = match header {
            HeaderMode::LanguageLine => format!("\"Language: {locale}\n{body}"),
            HeaderMode::Verbatim => body.to_owned(),
        };
        write_catalog(&path, &content)?;
        tracing::info!("wrote catalog: {}", path.display());
        written.push(WrittenCatalog {
            locale: Locale::from(locale),
            path,
        });
    }
    Ok(written)
}

/// Overwrite a single catalog file via tmp + rename.
fn write_catalog(path: &Path, content: &str) -> Result<(), SyncError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let tmp = PathBuf::from(format!("{}.tmp", path.display()));
    std::fs::write(&tmp, content).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
