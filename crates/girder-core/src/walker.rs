//! Lazy walk over the decoded tar stream.
//!
//! Entries are visited in the archive's physical order via internal
//! iteration: only the entry currently being visited is held in memory.
//! Anything that is not a directory or a regular file is skipped with a
//! warning — the template format has no business carrying symlinks or
//! device nodes.

use std::io::Read;

use tar::EntryType;
use tracing::{debug, warn};

use crate::error::{GirderError, GirderResult};

/// Supported entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One record of the template tree, ephemeral for the duration of a visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Forward-slash relative path, normalized (no `./` prefix, no trailing
    /// slash).
    pub path: String,
    pub kind: EntryKind,
    /// File bodies; empty for directories and zero-length files.
    pub content: Vec<u8>,
    /// Permission bits from the archive header.
    pub mode: u32,
}

/// Walk the tar stream in `reader`, invoking `visit` for each supported
/// entry until the end-of-archive marker.
///
/// The first error — structural or from the visitor — aborts the walk.
pub fn walk<R, F>(reader: R, mut visit: F) -> GirderResult<()>
where
    R: Read,
    F: FnMut(TemplateEntry) -> GirderResult<()>,
{
    let mut archive = tar::Archive::new(reader);
    let entries = archive.entries().map_err(|e| GirderError::Archive {
        reason: e.to_string(),
    })?;

    for entry in entries {
        let mut entry = entry.map_err(|e| GirderError::Archive {
            reason: e.to_string(),
        })?;

        let raw_path = String::from_utf8(entry.path_bytes().into_owned()).map_err(|_| {
            GirderError::Archive {
                reason: "entry path is not valid UTF-8".into(),
            }
        })?;

        let Some(path) = normalize(&raw_path) else {
            debug!(path = %raw_path, "skipping archive root marker");
            continue;
        };

        let kind = match entry.header().entry_type() {
            EntryType::Directory => EntryKind::Directory,
            EntryType::Regular => EntryKind::File,
            other => {
                warn!(path = %path, kind = ?other, "unsupported archive entry kind, skipping");
                continue;
            }
        };

        let mode = entry.header().mode().map_err(|e| GirderError::Archive {
            reason: format!("unreadable mode for {path}: {e}"),
        })?;

        let mut content = Vec::new();
        if kind == EntryKind::File {
            entry
                .read_to_end(&mut content)
                .map_err(|e| GirderError::Archive {
                    reason: format!("unreadable content for {path}: {e}"),
                })?;
        }

        visit(TemplateEntry {
            path,
            kind,
            content,
            mode,
        })?;
    }

    Ok(())
}

/// Strip the `./` prefix and trailing slash tar adds; `None` marks the bare
/// archive root, which has no on-disk counterpart of its own.
fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw
        .strip_prefix("./")
        .unwrap_or(raw)
        .trim_end_matches('/');

    if trimmed.is_empty() || trimmed == "." {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build an in-memory tar stream for tests. `None` content marks a
/// directory entry.
#[cfg(test)]
pub(crate) fn tar_fixture(entries: &[(&str, Option<&[u8]>, u32)]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (path, content, mode) in entries {
        let mut header = tar::Header::new_ustar();
        header.set_mode(*mode);
        match content {
            Some(bytes) => {
                header.set_entry_type(EntryType::Regular);
                header.set_size(bytes.len() as u64);
                builder.append_data(&mut header, path, *bytes).unwrap();
            }
            None => {
                header.set_entry_type(EntryType::Directory);
                header.set_size(0);
                builder.append_data(&mut header, path, &[][..]).unwrap();
            }
        }
    }
    builder.into_inner().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tar_with(entries: &[(&str, Option<&[u8]>, u32)]) -> Vec<u8> {
        tar_fixture(entries)
    }

    fn collect(tar_bytes: Vec<u8>) -> Vec<TemplateEntry> {
        let mut out = Vec::new();
        walk(Cursor::new(tar_bytes), |e| {
            out.push(e);
            Ok(())
        })
        .unwrap();
        out
    }

    #[test]
    fn yields_entries_in_physical_order() {
        let bytes = tar_with(&[
            ("foo/", None, 0o755),
            ("foo/bar.txt", Some(b"hello"), 0o644),
        ]);
        let entries = collect(bytes);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "foo");
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[1].path, "foo/bar.txt");
        assert_eq!(entries[1].kind, EntryKind::File);
        assert_eq!(entries[1].content, b"hello");
    }

    #[test]
    fn dot_prefixed_names_are_normalized() {
        let bytes = tar_with(&[("./sub/", None, 0o755), ("./sub/a.tpl", Some(b"x"), 0o644)]);
        let entries = collect(bytes);
        assert_eq!(entries[0].path, "sub");
        assert_eq!(entries[1].path, "sub/a.tpl");
    }

    #[test]
    fn archive_root_marker_is_skipped() {
        let bytes = tar_with(&[("./", None, 0o755), ("a.txt", Some(b"x"), 0o644)]);
        let entries = collect(bytes);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "a.txt");
    }

    #[test]
    fn zero_length_file_still_yields_entry() {
        let bytes = tar_with(&[("empty.txt", Some(b""), 0o644)]);
        let entries = collect(bytes);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::File);
        assert!(entries[0].content.is_empty());
    }

    #[test]
    fn unsupported_kinds_are_skipped() {
        let mut builder = tar::Builder::new(Vec::new());

        let mut header = tar::Header::new_ustar();
        header.set_entry_type(EntryType::Symlink);
        header.set_size(0);
        header.set_mode(0o777);
        builder
            .append_link(&mut header, "link", "target")
            .unwrap();

        let mut header = tar::Header::new_ustar();
        header.set_entry_type(EntryType::Regular);
        header.set_size(4);
        header.set_mode(0o644);
        builder.append_data(&mut header, "kept.txt", &b"data"[..]).unwrap();

        let entries = collect(builder.into_inner().unwrap());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "kept.txt");
    }

    #[test]
    fn garbage_stream_is_an_archive_error() {
        let garbage = vec![0xffu8; 1024];
        let result = walk(Cursor::new(garbage), |_| Ok(()));
        assert!(matches!(result, Err(GirderError::Archive { .. })));
    }

    #[test]
    fn visitor_error_aborts_walk() {
        let bytes = tar_with(&[
            ("a.txt", Some(b"1"), 0o644),
            ("b.txt", Some(b"2"), 0o644),
        ]);
        let mut seen = 0;
        let result = walk(Cursor::new(bytes), |_| {
            seen += 1;
            Err(GirderError::Archive {
                reason: "stop".into(),
            })
        });
        assert!(result.is_err());
        assert_eq!(seen, 1);
    }
}
