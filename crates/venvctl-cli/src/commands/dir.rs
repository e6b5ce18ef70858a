//! Manage the virtualenv search directories

use crate::errors::{CliError, Result};
use crate::prompts;
use clap::Subcommand;
use colored::Colorize;
use std::path::Path;
use venvctl_config::{expand_user, normalize_path, Settings};
use venvctl_logger as logger;

#[derive(Subcommand, Debug, Clone)]
pub enum DirAction {
    /// Register a directory to search for existing virtualenvs
    Add {
        /// Directory to append to the search list
        path: Option<String>,
    },
    /// Show the configured search directories
    List,
}

pub fn handle_dir(action: DirAction) -> Result<()> {
    match action {
        DirAction::Add { path } => add_directory(path),
        DirAction::List => list_directories(),
    }
}

/// Append a directory to `virtualenv_directories` and persist immediately
///
/// Empty input aborts silently; a path that is not an existing directory is
/// rejected without touching settings. Duplicates are allowed.
fn add_directory(path: Option<String>) -> Result<()> {
    let entered = match path {
        Some(path) if !path.is_empty() => path,
        _ => {
            let initial = dirs::home_dir()
                .map(|home| format!("{}{}", home.display(), std::path::MAIN_SEPARATOR))
                .unwrap_or_default();

            match prompts::input_path("Directory path", &initial)? {
                Some(entered) => entered,
                None => return Ok(()),
            }
        }
    };

    let directory = normalize_path(Path::new(&expand_user(&entered)));
    if !directory.is_dir() {
        return Err(CliError::InvalidInput(format!(
            "\"{}\" is not a directory.",
            directory.display()
        )));
    }

    let mut settings = Settings::load()?;
    settings
        .virtualenv_directories
        .push(directory.to_string_lossy().to_string());
    settings.save()?;

    logger::success(&format!(
        "Added \"{}\" to the virtualenv search directories.",
        directory.display()
    ));
    Ok(())
}

fn list_directories() -> Result<()> {
    let settings = Settings::load()?;

    println!("{}", "Virtualenv directories:".bold().green());
    if settings.virtualenv_directories.is_empty() {
        println!("  {}", "(none)".yellow());
    }
    for directory in &settings.virtualenv_directories {
        println!("  {}", directory);
    }
    Ok(())
}
