//! Operator-supplied project identifiers.
//!
//! [`ProjectMetadata`] is constructed once per run by the CLI collector and
//! is read-only once the engine starts. The engine re-validates here so a
//! programmatic caller cannot smuggle empty fields past the prompts.

use crate::error::{GirderError, GirderResult};

/// The five identifiers that drive substitution and target placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    /// Project name; also the Go module name and the `<name>.json` stem.
    pub name: String,
    /// Owning organization.
    pub organization: String,
    /// Author credited in generated file headers.
    pub author: String,
    /// Docker image tag; empty means `<organization>/<name>`.
    pub docker_tag: String,
    /// Target directory; empty means `./<name>`.
    pub path: String,
    /// Whether to emit the `.drone.yml` CI descriptor.
    pub drone_enabled: bool,
}

impl ProjectMetadata {
    /// Check the non-empty invariants on required fields and reject project
    /// names that would escape the target root.
    pub fn validate(&self) -> GirderResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("organization", &self.organization),
            ("author", &self.author),
        ] {
            if value.trim().is_empty() {
                return Err(GirderError::InvalidMetadata {
                    field,
                    reason: "must not be empty".into(),
                });
            }
        }

        if self.name.contains('/') || self.name.contains('\\') {
            return Err(GirderError::InvalidMetadata {
                field: "name",
                reason: "must not contain path separators".into(),
            });
        }
        if self.name.starts_with('.') {
            return Err(GirderError::InvalidMetadata {
                field: "name",
                reason: "must not start with '.'".into(),
            });
        }

        Ok(())
    }

    /// Fill `docker_tag` and `path` from their documented defaults when the
    /// collector left them empty.
    pub fn resolve_defaults(&mut self) {
        if self.docker_tag.trim().is_empty() {
            self.docker_tag = format!("{}/{}", self.organization, self.name);
        }
        if self.path.trim().is_empty() {
            self.path = format!("./{}", self.name);
        }
    }
}
