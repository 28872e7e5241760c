//! Export file writer
//!
//! Files are written atomically: the JSON goes to a temp file next to the
//! target and is renamed over it, so a reader never sees a partial file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::trace;

use zhaexport_core::constants::EXPORT_FILE_EXTENSION;
use zhaexport_core::ExportRecord;

use crate::error::{Error, Result};

/// Export file path for a slug
pub fn export_path(output_dir: &Path, slug: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", slug, EXPORT_FILE_EXTENSION))
}

/// Write a record as pretty JSON (blocking)
///
/// Overwrites any existing file at `path`.
pub fn save_json(path: &Path, record: &ExportRecord) -> Result<()> {
    let data = record.to_pretty_json().map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = tempfile::Builder::new()
        .prefix(".zhaexport-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;

    file.write_all(&data).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    // Temp files are created owner-only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }

    file.persist(path).map_err(|e| write_err(e.error))?;

    trace!("Wrote {} bytes to {}", data.len(), path.display());

    Ok(())
}

/// Write a record to `<output_dir>/<slug>.json` on a blocking worker
pub async fn write_record(output_dir: &Path, slug: &str, record: ExportRecord) -> Result<PathBuf> {
    let path = export_path(output_dir, slug);
    let target = path.clone();

    tokio::task::spawn_blocking(move || save_json(&target, &record)).await??;

    Ok(path)
}
