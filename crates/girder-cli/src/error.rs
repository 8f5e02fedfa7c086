//! Error handling for the Girder CLI.
//!
//! Structured errors with user-friendly messages, actionable suggestions,
//! and exit-code mapping.  Every failure path reaching `main` exits 1;
//! argument-parse failures exit 2 via clap before any of this runs.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use girder_core::error::GirderError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (validation failed outside the prompt loop).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Project already exists.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// An error propagated from `girder-core`.
    #[error("Generation failed: {0}")]
    Core(#[from] GirderError),

    /// An interactive prompt could not be driven.
    #[error("Prompt failed: {message}")]
    PromptFailed { message: String },

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,

    /// External tool invocation failed.
    #[error("External command failed: {command}")]
    ExternalCommandFailed { command: String, detail: String },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::ProjectExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name or --path".into(),
            ],

            Self::Core(GirderError::TargetExists { path }) => vec![
                format!("The directory '{}' already exists", path.display()),
                "Use --force to overwrite (destructive)".into(),
            ],

            Self::Core(GirderError::Decode { .. }) | Self::Core(GirderError::Archive { .. }) => {
                vec![
                    "The embedded template archive could not be decoded".into(),
                    "This binary may be corrupt; reinstall girder".into(),
                ]
            }

            Self::Core(_) => vec![],

            Self::PromptFailed { .. } => vec![
                "Interactive prompts need a terminal".into(),
                "Supply all fields as flags together with --yes".into(),
            ],

            Self::ConfigError { message } => vec![
                format!("Configuration issue: {message}"),
                "Check your config file at ~/.config/girder/girder.toml".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions and available disk space".into(),
            ],

            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],

            Self::ExternalCommandFailed { command, detail } => {
                let mut s = vec![
                    format!("External command failed: {command}"),
                    "Ensure the tool is installed and in your PATH".into(),
                    "Use --no-init to skip repository and module setup".into(),
                ];
                if !detail.is_empty() {
                    s.push(format!("Output: {detail}"));
                }
                s
            }
        }
    }

    /// Exit code to pass to the OS.  All runtime failures exit 1; clap owns
    /// exit 2 for usage errors.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self {
            Self::InvalidInput { .. }
            | Self::ProjectExists { .. }
            | Self::Cancelled
            | Self::PromptFailed { .. } => tracing::warn!("{}", self),
            _ => tracing::error!("{}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }
}
