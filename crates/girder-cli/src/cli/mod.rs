//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "girder",
    bin_name = "girder",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bare service project generator",
    long_about = "Girder materializes a boilerplate service tree from an \
                  embedded template archive, filling in project name, \
                  organization, author, and date placeholders.",
    after_help = "EXAMPLES:\n\
        \x20 girder new my-service\n\
        \x20 girder new my-service --org acme --author 'Jane Doe' --yes\n\
        \x20 girder new my-service --drone --path ./services/my-service\n\
        \x20 girder completions bash > /usr/share/bash-completion/completions/girder",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project from the embedded template archive.
    #[command(
        visible_alias = "n",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 girder new my-service\n\
            \x20 girder new my-service --org acme --author 'Jane Doe' --yes\n\
            \x20 girder new my-service --drone"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 girder completions bash > ~/.local/share/bash-completion/completions/girder\n\
            \x20 girder completions zsh  > ~/.zfunc/_girder\n\
            \x20 girder completions fish > ~/.config/fish/completions/girder.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `girder new`.
///
/// Every metadata field can be supplied as a flag; whatever is missing is
/// collected interactively.  `--yes` disables the prompts entirely, in which
/// case the required fields must come from flags or configuration defaults.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name.  Seeds the interactive prompt when given.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Owning organization.
    #[arg(long = "org", value_name = "ORG", help = "Project organization")]
    pub organization: Option<String>,

    /// Project author.
    #[arg(long = "author", value_name = "AUTHOR", help = "Project author")]
    pub author: Option<String>,

    /// Docker image tag (default: `<org>/<name>`).
    #[arg(
        long = "docker-tag",
        value_name = "TAG",
        help = "Docker image tag (default: <org>/<name>)"
    )]
    pub docker_tag: Option<String>,

    /// Target directory (default: `./<name>`).
    #[arg(
        long = "path",
        value_name = "DIR",
        help = "Target directory (default: ./<name>)"
    )]
    pub path: Option<String>,

    /// Emit the DroneCI descriptor at the project root.
    #[arg(long = "drone", help = "Generate a .drone.yml CI descriptor")]
    pub drone: bool,

    /// Skip all prompts; answers must come from flags or config.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip prompts and confirmation, use flags/config only"
    )]
    pub yes: bool,

    /// Remove an existing target directory first (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Skip `git init` and `go mod init` in the generated project.
    #[arg(long = "no-init", help = "Skip repository and module initialization")]
    pub no_init: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `girder completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
