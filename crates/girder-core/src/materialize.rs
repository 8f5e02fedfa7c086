//! Filesystem materialization of template entries.
//!
//! The target root is threaded explicitly through [`Materializer`]; nothing
//! here (or anywhere else in the engine) changes the process working
//! directory. Parent directories are created per file, so correctness does
//! not depend on the archive listing directories before their contents.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{GirderError, GirderResult};
use crate::placeholder::PlaceholderSet;
use crate::walker::{EntryKind, TemplateEntry};

/// Filename suffix marking a file for substitution. The suffix is stripped
/// from the output path; substitution itself runs on every file regardless.
pub const TEMPLATE_SUFFIX: &str = ".tpl";

/// Writes substituted template entries beneath a fixed root.
pub struct Materializer<'a> {
    root: &'a Path,
    placeholders: &'a PlaceholderSet,
}

impl<'a> Materializer<'a> {
    pub fn new(root: &'a Path, placeholders: &'a PlaceholderSet) -> Self {
        Self { root, placeholders }
    }

    /// Materialize one entry. Directory creation and file writes are both
    /// idempotent: re-running against the same root overwrites cleanly.
    pub fn write_entry(&self, entry: &TemplateEntry) -> GirderResult<()> {
        let rel = self.placeholders.substitute(&entry.path);
        let rel = checked_relative(&rel)?;

        match entry.kind {
            EntryKind::Directory => {
                let dir = self.root.join(&rel);
                fs::create_dir_all(&dir).map_err(|e| GirderError::fs(&dir, e))?;
                debug!(path = %dir.display(), "created directory");
            }
            EntryKind::File => {
                let rel = strip_template_suffix(&rel);
                let dest = self.root.join(&rel);

                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent).map_err(|e| GirderError::fs(parent, e))?;
                }

                let bytes = match std::str::from_utf8(&entry.content) {
                    Ok(text) => self.placeholders.substitute(text).into_bytes(),
                    Err(_) => {
                        warn!(path = %dest.display(), "non-UTF-8 content, written verbatim");
                        entry.content.clone()
                    }
                };

                fs::write(&dest, bytes).map_err(|e| GirderError::fs(&dest, e))?;
                apply_executable_bit(&dest, entry.mode)?;
                debug!(path = %dest.display(), "wrote file");
            }
        }

        Ok(())
    }
}

/// A template entry must stay inside the target root: relative, and no `..`
/// components.
fn checked_relative(rel: &str) -> GirderResult<PathBuf> {
    let path = PathBuf::from(rel);

    let escapes = path.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(GirderError::Archive {
            reason: format!("entry path escapes the target root: {rel}"),
        });
    }

    Ok(path)
}

/// Strip one literal `.tpl` suffix from the final path component.
fn strip_template_suffix(rel: &Path) -> PathBuf {
    let Some(name) = rel.file_name().and_then(|n| n.to_str()) else {
        return rel.to_path_buf();
    };

    match name.strip_suffix(TEMPLATE_SUFFIX) {
        Some(stem) if !stem.is_empty() => rel.with_file_name(stem),
        _ => rel.to_path_buf(),
    }
}

#[cfg(unix)]
fn apply_executable_bit(path: &Path, mode: u32) -> GirderResult<()> {
    use std::os::unix::fs::PermissionsExt;

    if mode & 0o111 != 0 {
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .map_err(|e| GirderError::fs(path, e))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn apply_executable_bit(_path: &Path, _mode: u32) -> GirderResult<()> {
    Ok(())
}
