//! Interactive prompts.
//!
//! Responsibilities:
//! - Read secrets without echo when they were not passed as flags.
//! - Ask for confirmation before destructive admin actions.

use anyhow::{Context, Result};
use secrecy::SecretString;

/// Use `provided` when given, otherwise prompt for it without echo.
pub fn secret_or_prompt(provided: Option<String>, prompt_text: &str) -> Result<SecretString> {
    if let Some(value) = provided {
        return Ok(SecretString::new(value.into()));
    }
    let input = dialoguer::Password::new()
        .with_prompt(prompt_text)
        .allow_empty_password(false)
        .interact()
        .with_context(|| format!("{prompt_text} is required (pass it as a flag when not on a terminal)"))?;
    Ok(SecretString::new(input.into()))
}

/// Use `provided` when given, otherwise prompt for a plain line of text.
pub fn text_or_prompt(provided: Option<String>, prompt_text: &str) -> Result<String> {
    if let Some(value) = provided {
        return Ok(value);
    }
    dialoguer::Input::<String>::new()
        .with_prompt(prompt_text)
        .interact_text()
        .with_context(|| format!("{prompt_text} is required (pass it as a flag when not on a terminal)"))
}

/// Ask before deleting `item_name`. `force` skips the prompt.
pub fn confirm_delete(item_name: &str, item_type: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("Delete {item_type} '{item_name}'?"))
        .default(false)
        .interact()
        .context("Confirmation needs a terminal; pass --force to skip it")?;
    if !confirmed {
        eprintln!("Delete cancelled.");
    }
    Ok(confirmed)
}
