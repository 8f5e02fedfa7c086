//! Compile-time embedded template blobs.
//!
//! Each constant loads a packed asset from `assets/` via [`include_str!`].
//! The assets are produced from the source trees under `templates/` at the
//! repository root by `scripts/pack-templates.sh`; re-run that script after
//! editing any template file. The framing (tar → gzip → base64) must match
//! what [`crate::codec`] expects.

/// The full boilerplate tree: base64-wrapped, gzip-compressed tar stream.
pub const PROJECT_ARCHIVE: &str = include_str!("../assets/project.tar.gz.b64");

/// The single-document CI descriptor: base64 only, no archive framing.
pub const DRONE_TEMPLATE: &str = include_str!("../assets/drone.yml.b64");
