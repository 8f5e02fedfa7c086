//! Girder Core — template unpacking and substitution engine.
//!
//! The pipeline is a single sequential pass:
//!
//! ```text
//! ProjectMetadata ──▶ PlaceholderSet (resolved once, incl. TODAY)
//!                         │
//! embedded blob ──▶ codec (base64 → gzip) ──▶ walker (tar entries)
//!                         │                        │
//!                         └────── per-entry substitution ──▶ materializer
//!                                                               │
//!                                      staging dir ── atomic promote ──▶ target
//! ```
//!
//! The CI descriptor takes a shorter path: a base64-only single document,
//! substituted with the narrow `{PROJ_ORG, PROJ_NAME}` set and written at
//! the project root. It never touches the tar walker.
//!
//! This crate only emits `tracing` events; subscriber installation belongs
//! to the CLI.

pub mod codec;
pub mod embedded;
pub mod error;
pub mod generate;
pub mod materialize;
pub mod metadata;
pub mod placeholder;
pub mod walker;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::error::{DecodeStage, GirderError, GirderResult};
    pub use crate::generate::Generator;
    pub use crate::metadata::ProjectMetadata;
    pub use crate::placeholder::{PlaceholderSet, Token};
    pub use crate::walker::{EntryKind, TemplateEntry};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
