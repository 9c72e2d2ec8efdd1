use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::error::{IcopackError, IcopackResult};

/// Create `dest`'s parent directories if missing.
pub fn ensure_parent_dir(dest: &Path) -> IcopackResult<()> {
    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| IcopackError::io(parent, e))?;
    }
    Ok(())
}

/// Write `bytes` to `dest`, creating or replacing it.
///
/// The bytes go to a temporary sibling first and are renamed into place once flushed, so
/// `dest` is either left untouched or holds the complete new content.
pub fn write_file(dest: &Path, bytes: &[u8]) -> IcopackResult<()> {
    ensure_parent_dir(dest)?;

    let tmp_path = temp_sibling(dest)?;
    let guard = TempFileGuard(Some(tmp_path.clone()));
    {
        let mut f =
            std::fs::File::create(&tmp_path).map_err(|e| IcopackError::io(&tmp_path, e))?;
        f.write_all(bytes)
            .and_then(|()| f.sync_all())
            .map_err(|e| IcopackError::io(&tmp_path, e))?;
    }
    std::fs::rename(&tmp_path, dest).map_err(|e| IcopackError::io(dest, e))?;
    guard.disarm();

    tracing::debug!(path = %dest.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}

static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Sibling temp path, unique per call within the process.
fn temp_sibling(dest: &Path) -> IcopackResult<PathBuf> {
    let name = dest.file_name().ok_or_else(|| {
        IcopackError::io(
            dest,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "destination has no file name"),
        )
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
    tmp_name.push(format!(".{}.{seq}.tmp", std::process::id()));
    Ok(dest.with_file_name(tmp_name))
}

/// Removes the temporary file unless the write completed.
struct TempFileGuard(Option<PathBuf>);

impl TempFileGuard {
    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/output.rs"]
mod tests;
