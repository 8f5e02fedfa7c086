//! Interactive metadata collection primitives.
//!
//! Thin wrappers around `dialoguer` so the command layer never touches the
//! prompt library directly.  Empty input on a required field re-prompts;
//! that loop never escapes this module as an error.

use dialoguer::{Confirm, Input};

use crate::error::{CliError, CliResult};

fn prompt_failed(e: dialoguer::Error) -> CliError {
    CliError::PromptFailed {
        message: e.to_string(),
    }
}

/// Prompt for a required (non-empty) value.  `seed` pre-fills the answer
/// when present and non-empty.
pub fn required(label: &str, seed: Option<&str>) -> CliResult<String> {
    let mut input = Input::<String>::new()
        .with_prompt(label)
        .validate_with(move |value: &String| {
            if value.trim().is_empty() {
                Err(format!("{label} must not be empty"))
            } else {
                Ok(())
            }
        });

    if let Some(seed) = seed.filter(|s| !s.trim().is_empty()) {
        input = input.default(seed.to_string());
    }

    input.interact_text().map_err(prompt_failed)
}

/// Prompt with a non-empty default; accepting the default is always valid.
pub fn with_default(label: &str, default: String) -> CliResult<String> {
    Input::<String>::new()
        .with_prompt(label)
        .default(default)
        .interact_text()
        .map_err(prompt_failed)
}

/// Yes/no confirmation.
pub fn confirm(label: &str, default: bool) -> CliResult<bool> {
    Confirm::new()
        .with_prompt(label)
        .default(default)
        .interact()
        .map_err(prompt_failed)
}
