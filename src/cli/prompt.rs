//! Interactive prompting for missing command arguments

use dialoguer::{theme::ColorfulTheme, Input};
use std::path::{Path, PathBuf};

/// Prompt for a key name. Empty input is returned as an empty string; the
/// caller decides whether that aborts the command.
pub fn prompt_key_name() -> dialoguer::Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Key Name")
        .allow_empty(true)
        .interact_text()?;

    Ok(value.trim().to_string())
}

/// Prompt for the public key path, offering `default` when one is known.
/// Empty input with no default means the argument stays absent.
pub fn prompt_public_key(default: Option<&Path>) -> dialoguer::Result<Option<PathBuf>> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt("Public key")
        .allow_empty(true);

    if let Some(default) = default {
        input = input.default(default.display().to_string());
    }

    let value = input.interact_text()?;
    let trimmed = value.trim();

    Ok((!trimmed.is_empty()).then(|| PathBuf::from(trimmed)))
}
