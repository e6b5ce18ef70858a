//! Activate a virtualenv for the current project

use crate::common::VenvContext;
use crate::errors::Result;
use crate::prompts;
use venvctl_config::expand_user;
use venvctl_logger as logger;

/// Associate a virtualenv with the project
///
/// With an explicit path the association is written directly (validation is
/// lazy and happens at build time). Without one, discovered virtualenvs are
/// offered in a selection list; cancelling changes nothing.
pub fn handle_activate(path: Option<String>) -> Result<()> {
    let mut ctx = VenvContext::load()?;

    let venv = match path {
        Some(path) if !path.is_empty() => expand_user(&path),
        _ => {
            logger::spinner_start("Searching for virtualenvs...");
            let venvs = ctx.find_virtualenvs();
            logger::spinner_stop();

            if venvs.is_empty() {
                logger::warn(
                    "No virtualenvs found. Create one with `venvctl new` or register a search directory with `venvctl dir add`.",
                );
                return Ok(());
            }

            match prompts::select_path("Activate virtualenv", &venvs)? {
                Some(selected) => selected.to_string_lossy().to_string(),
                None => return Ok(()),
            }
        }
    };

    ctx.set_virtualenv(Some(&venv))
}
