//! External tool invocation: repository and module initialization.
//!
//! Both tools run pinned to the generated project root via `current_dir`;
//! the process working directory is never changed.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{CliError, CliResult};

/// `git init --quiet --initial-branch=main` in `root`.
pub fn git_init(root: &Path) -> CliResult<()> {
    run(root, "git", &["init", "--quiet", "--initial-branch=main"])
}

/// `go mod init <module>` in `root`.
pub fn go_mod_init(root: &Path, module: &str) -> CliResult<()> {
    run(root, "go", &["mod", "init", module])
}

fn run(root: &Path, program: &str, args: &[&str]) -> CliResult<()> {
    let rendered = format!("{program} {}", args.join(" "));
    debug!(command = %rendered, root = %root.display(), "invoking external tool");

    let output = Command::new(program)
        .args(args)
        .current_dir(root)
        .output()
        .map_err(|e| CliError::ExternalCommandFailed {
            command: rendered.clone(),
            detail: e.to_string(),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(CliError::ExternalCommandFailed {
            command: rendered,
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
