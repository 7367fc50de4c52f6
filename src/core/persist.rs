//! Writing catalogs to disk.

use std::{fs, io::Write, path::Path};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::Result;

/// Serialize `value` as 2-space indented JSON (non-ASCII kept as-is) and
/// write it to `path`.
///
/// The document is fully serialized before the file system is touched.
pub fn write_catalog<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_string(path, &json)?;
    Ok(())
}

/// Write a string to file, creating parent directories.
///
/// Goes through a temp file in the same directory persisted over `path`, so
/// readers see either the old contents or the new ones, never a truncated
/// file. The temp file is removed on drop if anything fails.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;

    // Temp files are created owner-only; catalogs are served to other users.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
