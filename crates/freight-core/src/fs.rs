//! Atomic document writes.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{FreightError, Result};

/// Write `data` to `path` through a synced sibling temp file and a rename.
///
/// Readers either see the previous document or the complete new one. The
/// temp file never outlives a failed call.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let temp = temp_sibling(path)?;
    let outcome = write_synced(&temp, data).and_then(|_| replace(&temp, path));
    if let Err(err) = outcome {
        let _ = fs::remove_file(&temp);
        return Err(FreightError::Storage(format!(
            "falha ao gravar {}: {}",
            path.display(),
            err
        )));
    }
    Ok(())
}

/// `.<name>.<nanos>.tmp` next to `path`.
fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| FreightError::Storage(format!("caminho inválido: {}", path.display())))?;
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    Ok(path.with_file_name(format!(".{}.{}.tmp", name, stamp)))
}

fn write_synced(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(data)?;
    file.sync_all()
}

/// Rename over `destination`. Where rename refuses an existing target
/// (Windows), the target is removed and the rename retried once.
fn replace(temp: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(temp, destination) {
        Ok(()) => Ok(()),
        Err(first) if destination.exists() => {
            fs::remove_file(destination)?;
            fs::rename(temp, destination).map_err(|retry| {
                io::Error::new(
                    retry.kind(),
                    format!("rename falhou ({}; nova tentativa: {})", first, retry),
                )
            })
        }
        Err(err) => Err(err),
    }
}
