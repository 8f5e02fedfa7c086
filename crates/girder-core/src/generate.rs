//! Generation pipeline: decode → walk → substitute → materialize → promote.
//!
//! The whole run is staged into a temporary directory next to the target and
//! promoted with a single rename once every entry has been written. A
//! failure at any point discards the staging directory, so the target path
//! either receives a complete project tree or is left untouched.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::codec;
use crate::embedded;
use crate::error::{DecodeStage, GirderError, GirderResult};
use crate::materialize::Materializer;
use crate::metadata::ProjectMetadata;
use crate::placeholder::PlaceholderSet;
use crate::walker;

/// Filename of the CI descriptor written at the project root.
pub const CI_DESCRIPTOR_NAME: &str = ".drone.yml";

/// Decode `blob` and materialize every entry beneath `root`.
///
/// Both decode framings are unwrapped up front, so a corrupt blob fails
/// before a single byte lands under `root`.
pub fn materialize_archive(
    blob: &str,
    root: &Path,
    placeholders: &PlaceholderSet,
) -> GirderResult<()> {
    let tar_bytes = codec::decode_archive(blob)?;
    let materializer = Materializer::new(root, placeholders);
    walker::walk(Cursor::new(tar_bytes), |entry| {
        materializer.write_entry(&entry)
    })
}

/// One project-generation run over validated metadata.
pub struct Generator {
    metadata: ProjectMetadata,
    placeholders: PlaceholderSet,
}

impl Generator {
    /// Validate metadata, resolve defaults, and resolve the placeholder set
    /// (including `TODAY`) once for the whole run.
    pub fn new(metadata: ProjectMetadata) -> GirderResult<Self> {
        let today = chrono::Local::now().format("%m/%d/%Y").to_string();
        Self::with_today(metadata, today)
    }

    /// Same as [`Generator::new`] with an explicit `TODAY` value.
    pub fn with_today(mut metadata: ProjectMetadata, today: String) -> GirderResult<Self> {
        metadata.validate()?;
        metadata.resolve_defaults();
        let placeholders = PlaceholderSet::with_today(&metadata, today);

        Ok(Self {
            metadata,
            placeholders,
        })
    }

    /// The metadata after validation and default resolution.
    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    /// Materialize the embedded template tree at the metadata's target path.
    ///
    /// Returns the target path on success. The target must not already
    /// exist; the staged tree is promoted to it atomically.
    #[instrument(skip_all, fields(project = %self.metadata.name))]
    pub fn run(&self) -> GirderResult<PathBuf> {
        let target = PathBuf::from(&self.metadata.path);
        if target.exists() {
            return Err(GirderError::TargetExists { path: target });
        }

        // Stage next to the target so the promote is a same-filesystem rename.
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| GirderError::fs(&parent, e))?;

        let staging = tempfile::Builder::new()
            .prefix(".girder-")
            .tempdir_in(&parent)
            .map_err(|e| GirderError::fs(&parent, e))?;

        self.materialize_tree(staging.path())?;
        self.write_manifest_stub(staging.path())?;
        if self.metadata.drone_enabled {
            self.write_ci_descriptor(staging.path())?;
        }

        // Promote. From here the staging dir's Drop guard no longer owns the
        // tree, so clean up manually if the rename itself fails.
        let staged = staging.keep();
        if let Err(e) = fs::rename(&staged, &target) {
            let _ = fs::remove_dir_all(&staged);
            return Err(GirderError::fs(&target, e));
        }

        info!(target = %target.display(), "project tree materialized");
        Ok(target)
    }

    /// Unpack and substitute the embedded boilerplate tree beneath `root`.
    pub fn materialize_tree(&self, root: &Path) -> GirderResult<()> {
        materialize_archive(embedded::PROJECT_ARCHIVE, root, &self.placeholders)
    }

    /// The `<name>.json` stub read by the generated project's own
    /// configuration loader.
    fn write_manifest_stub(&self, root: &Path) -> GirderResult<()> {
        let path = root.join(format!("{}.json", self.metadata.name));
        fs::write(&path, "{}").map_err(|e| GirderError::fs(&path, e))
    }

    /// Decode the single-document CI blob (no archive framing), substitute
    /// the narrow `{PROJ_ORG, PROJ_NAME}` set, and write it at the root.
    fn write_ci_descriptor(&self, root: &Path) -> GirderResult<()> {
        let raw = codec::decode_document(embedded::DRONE_TEMPLATE)?;
        let text = String::from_utf8(raw).map_err(|_| GirderError::Decode {
            stage: DecodeStage::Encoding,
            reason: "CI descriptor is not valid UTF-8".into(),
        })?;

        let rendered = PlaceholderSet::for_ci(&self.metadata).substitute(&text);
        let path = root.join(CI_DESCRIPTOR_NAME);
        fs::write(&path, rendered).map_err(|e| GirderError::fs(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(path: &str, drone: bool) -> ProjectMetadata {
        ProjectMetadata {
            name: "demo".into(),
            organization: "acme".into(),
            author: "Jane".into(),
            docker_tag: String::new(),
            path: path.into(),
            drone_enabled: drone,
        }
    }

    fn generator(path: &str, drone: bool) -> Generator {
        Generator::with_today(meta(path, drone), "01/02/2026".into()).unwrap()
    }

    #[test]
    fn invalid_metadata_is_rejected_at_construction() {
        let mut bad = meta("./x", false);
        bad.author.clear();
        assert!(Generator::new(bad).is_err());
    }

    #[test]
    fn defaults_resolved_at_construction() {
        let g = generator("", false);
        assert_eq!(g.metadata().docker_tag, "acme/demo");
        assert_eq!(g.metadata().path, "./demo");
    }

    #[test]
    fn run_rejects_existing_target() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("demo");
        fs::create_dir(&target).unwrap();

        let g = generator(target.to_str().unwrap(), false);
        assert!(matches!(
            g.run(),
            Err(GirderError::TargetExists { .. })
        ));
    }

    #[test]
    fn failed_run_leaves_no_staging_residue() {
        // Corrupt blob: decode fails before anything is staged, and the
        // staging guard removes the temp dir.
        let tmp = tempfile::tempdir().unwrap();
        let ph = PlaceholderSet::with_today(&meta("./x", false), "01/02/2026");

        let result = materialize_archive("%%% not base64 %%%", tmp.path(), &ph);
        assert!(result.is_err());
        assert!(fs::read_dir(tmp.path()).unwrap().next().is_none());
    }

    #[test]
    fn materialize_archive_from_synthetic_blob() {
        let tar = crate::walker::tar_fixture(&[
            ("pkg/", None, 0o755),
            ("pkg/###__PROJ_NAME__###.go.tpl", Some(b"// ###__PROJ_ORG__###" as &[u8]), 0o644),
        ]);
        let blob = codec::encode_archive(&tar).unwrap();

        let tmp = tempfile::tempdir().unwrap();
        let ph = PlaceholderSet::with_today(&meta("./x", false), "01/02/2026");
        materialize_archive(&blob, tmp.path(), &ph).unwrap();

        let written = fs::read_to_string(tmp.path().join("pkg/demo.go")).unwrap();
        assert_eq!(written, "// acme");
    }
}
