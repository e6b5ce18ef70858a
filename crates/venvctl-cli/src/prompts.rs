//! Interactive prompt helpers
//!
//! Every prompt treats cancel (Esc) and empty input as "nothing selected";
//! callers turn that into a silent no-op. Non-interactive invocations bypass
//! these entirely by passing paths/flags on the command line.

use crate::errors::{CliError, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;

fn prompt_err(e: dialoguer::Error) -> CliError {
    CliError::Prompt(e.to_string())
}

/// Pick one path from a list; `None` when cancelled
pub fn select_path(prompt: &str, items: &[PathBuf]) -> Result<Option<PathBuf>> {
    let labels: Vec<String> = items
        .iter()
        .map(|path| path.to_string_lossy().to_string())
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(prompt_err)?;

    Ok(selection.and_then(|index| items.get(index).cloned()))
}

/// Pick one label from a list; `None` when cancelled
pub fn select_label(prompt: &str, labels: &[String]) -> Result<Option<usize>> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(labels)
        .default(0)
        .interact_opt()
        .map_err(prompt_err)
}

/// Free-form path input; `None` when left empty
pub fn input_path(prompt: &str, initial: &str) -> Result<Option<String>> {
    let entered: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)?;

    let trimmed = entered.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// Yes/no confirmation; dismissing counts as "no"
pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact_opt()
        .map_err(prompt_err)
        .map(|choice| choice.unwrap_or(false))
}
