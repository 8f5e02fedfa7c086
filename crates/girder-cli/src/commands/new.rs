//! Implementation of the `girder new` command.
//!
//! Responsibility: assemble `ProjectMetadata` from flags, configuration
//! defaults, and interactive prompts, then hand it to the core generator
//! and run the post-generation tool hooks.  No engine logic lives here.

use std::path::PathBuf;

use tracing::{info, instrument};

use girder_core::generate::Generator;
use girder_core::metadata::ProjectMetadata;

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt, tools,
};

/// Execute the `girder new` command.
///
/// Dispatch sequence:
/// 1. Collect metadata (flags answer outright; prompts fill the gaps)
/// 2. Validate and resolve defaults via the core generator
/// 3. Echo the accepted configuration and confirm unless `--yes`/`--quiet`
/// 4. Handle `--force` removal of an existing target
/// 5. Materialize the project tree (staged, atomically promoted)
/// 6. Initialize repository and module unless `--no-init`
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let metadata = collect_metadata(&args, &config)?;
    let generator = Generator::new(metadata)?;
    let meta = generator.metadata().clone();

    show_configuration(&meta, &output)?;

    if !global.quiet && !args.yes {
        if !prompt::confirm("Create project?", true)? {
            return Err(CliError::Cancelled);
        }
    }

    let target = PathBuf::from(&meta.path);
    if target.exists() {
        if args.force {
            std::fs::remove_dir_all(&target).map_err(|e| CliError::IoError {
                message: format!("failed to remove {}", target.display()),
                source: e,
            })?;
        } else {
            return Err(CliError::ProjectExists { path: target });
        }
    }

    output.header("Unpacking templates")?;
    info!(project = %meta.name, path = %target.display(), "generation started");
    let created = generator.run()?;

    if !args.no_init {
        output.header("Initializing repository and module")?;
        tools::git_init(&created)?;
        tools::go_mod_init(&created, &meta.name)?;
    }

    info!(project = %meta.name, "generation completed");
    output.success(&format!(
        "Project '{}' created at {}",
        meta.name,
        created.display()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", created.display()))?;
        output.print("  go mod tidy")?;
    }

    Ok(())
}

// ── Metadata collection ───────────────────────────────────────────────────────

/// Resolve the five metadata fields.  A flag answers its field outright;
/// configuration defaults seed the prompts; `--yes` forbids prompting and
/// requires the three mandatory fields from flags or config.
fn collect_metadata(args: &NewArgs, config: &AppConfig) -> CliResult<ProjectMetadata> {
    if args.yes {
        return collect_non_interactive(args, config);
    }

    let name = match nonempty(args.name.as_deref()) {
        Some(n) => n,
        None => prompt::required("Project name", None)?,
    };
    let organization = match nonempty(args.organization.as_deref()) {
        Some(o) => o,
        None => prompt::required(
            "Project organization",
            config.defaults.organization.as_deref(),
        )?,
    };
    let author = match nonempty(args.author.as_deref()) {
        Some(a) => a,
        None => prompt::required("Project author", config.defaults.author.as_deref())?,
    };
    let docker_tag = match nonempty(args.docker_tag.as_deref()) {
        Some(t) => t,
        None => prompt::with_default("Docker image tag", format!("{organization}/{name}"))?,
    };
    let drone_enabled = if args.drone {
        true
    } else {
        prompt::confirm("Enable DroneCI", false)?
    };
    let path = match nonempty(args.path.as_deref()) {
        Some(p) => p,
        None => prompt::with_default("Project path", format!("./{name}"))?,
    };

    Ok(ProjectMetadata {
        name,
        organization,
        author,
        docker_tag,
        path,
        drone_enabled,
    })
}

fn collect_non_interactive(args: &NewArgs, config: &AppConfig) -> CliResult<ProjectMetadata> {
    let name = nonempty(args.name.as_deref()).ok_or_else(|| CliError::InvalidInput {
        message: "--yes requires a project name".into(),
    })?;
    let organization = nonempty(args.organization.as_deref())
        .or_else(|| nonempty(config.defaults.organization.as_deref()))
        .ok_or_else(|| CliError::InvalidInput {
            message: "--yes requires --org or a configured default organization".into(),
        })?;
    let author = nonempty(args.author.as_deref())
        .or_else(|| nonempty(config.defaults.author.as_deref()))
        .ok_or_else(|| CliError::InvalidInput {
            message: "--yes requires --author or a configured default author".into(),
        })?;

    // docker_tag and path fall back to their engine-side defaults.
    Ok(ProjectMetadata {
        name,
        organization,
        author,
        docker_tag: args.docker_tag.clone().unwrap_or_default(),
        path: args.path.clone().unwrap_or_default(),
        drone_enabled: args.drone,
    })
}

fn nonempty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(meta: &ProjectMetadata, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.field("Project name", &meta.name)?;
    out.field("Organization", &meta.organization)?;
    out.field("Author", &meta.author)?;
    out.field("Docker image tag", &meta.docker_tag)?;
    out.field("DroneCI", if meta.drone_enabled { "yes" } else { "no" })?;
    out.field("Project path", &meta.path)?;
    out.print("")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
