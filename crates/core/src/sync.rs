//! Content-hash-gated file synchronization
//!
//! Rendered content is only written when its digest differs from what is on
//! disk, so repeated runs against unchanged inputs touch nothing. Writes go
//! through a temporary file in the target directory and a rename, so a
//! digest check never observes partial content.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::Result;
use crate::error::CoreError;
use crate::hash::{ExistingDigest, hash_bytes};
use crate::render::Renderer;
use crate::version::Version;

/// Options for a sync invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Report what would change without writing anything
    pub dry_run: bool,
}

/// Write `content` to `path` unless the file already holds identical bytes.
///
/// Returns `true` when the file was created or overwritten. A missing file
/// always counts as changed; see [`ExistingDigest`].
pub fn write_if_changed(content: &[u8], path: &Path) -> Result<bool> {
    let existing = ExistingDigest::of(path)?;
    let created = hash_bytes(content);

    if existing.matches(&created) {
        debug!(path = %path.display(), "unchanged");
        return Ok(false);
    }

    write_atomic(content, path)?;
    info!(path = %path.display(), "written");
    Ok(true)
}

/// Replace `path` with `content` via a same-directory temp file and rename
fn write_atomic(content: &[u8], path: &Path) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp =
        NamedTempFile::new_in(dir).map_err(|e| CoreError::io("temp file create", path, e))?;
    tmp.write_all(content)
        .map_err(|e| CoreError::io("write", path, e))?;
    // Temp files are created 0600; the generated files are plain text meant
    // for any reader of the checkout.
    set_readable(tmp.as_file(), path)?;
    tmp.persist(path)
        .map_err(|e| CoreError::io("rename", path, e.error))?;
    Ok(())
}

/// Give a generated file the usual text-file permissions
#[cfg(unix)]
fn set_readable(file: &std::fs::File, path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let permissions = std::fs::Permissions::from_mode(0o644);
    file.set_permissions(permissions)
        .map_err(|e| CoreError::io("set permissions", path, e))?;
    Ok(())
}

#[cfg(windows)]
fn set_readable(_file: &std::fs::File, _path: &Path) -> Result<()> {
    // Windows doesn't use Unix permissions
    Ok(())
}

/// Render the project descriptor for `version` and sync it into `output`.
///
/// Returns the paths actually written, in sync order. An error partway
/// leaves earlier writes on disk; there is no rollback. With
/// `options.dry_run` set, returns the paths that would change and writes
/// nothing.
pub fn sync(
    renderer: &Renderer,
    version: &Version,
    output: &Path,
    options: &SyncOptions,
) -> Result<Vec<PathBuf>> {
    let rendered = renderer.render(version)?;
    let mut changed = Vec::new();

    for (path, content) in rendered.into_pairs(output) {
        if options.dry_run {
            if !ExistingDigest::of(&path)?.matches(&hash_bytes(&content)) {
                changed.push(path);
            }
        } else if write_if_changed(&content, &path)? {
            changed.push(path);
        }
    }

    Ok(changed)
}
