//! Delete a virtualenv from disk

use crate::common::VenvContext;
use crate::errors::Result;
use crate::prompts;
use std::fs;
use std::path::PathBuf;
use venvctl_config::expand_user;
use venvctl_logger as logger;

/// Remove a virtualenv after confirmation
///
/// A failed deletion is logged and changes nothing. A successful deletion
/// clears the project association only when the removed path was the active
/// one.
pub fn handle_remove(path: Option<String>, yes: bool) -> Result<()> {
    let mut ctx = VenvContext::load()?;

    let venv: PathBuf = match path {
        Some(path) if !path.is_empty() => PathBuf::from(expand_user(&path)),
        _ => {
            logger::spinner_start("Searching for virtualenvs...");
            let venvs = ctx.find_virtualenvs();
            logger::spinner_stop();

            if venvs.is_empty() {
                logger::warn("No virtualenvs found.");
                return Ok(());
            }

            match prompts::select_path("Remove virtualenv", &venvs)? {
                Some(selected) => selected,
                None => return Ok(()),
            }
        }
    };

    if !yes {
        let confirmed = prompts::confirm(&format!(
            "Please confirm deletion of virtualenv at:\n\"{}\".",
            venv.display()
        ))?;
        if !confirmed {
            return Ok(());
        }
    }

    if let Err(e) = fs::remove_dir_all(&venv) {
        logger::error(&format!("Could not delete \"{}\": {}", venv.display(), e));
        return Ok(());
    }

    logger::info(&format!("\"{}\" deleted.", venv.display()));

    if venv.to_string_lossy() == ctx.active_virtualenv(None) {
        ctx.set_virtualenv(None)?;
    }

    Ok(())
}
