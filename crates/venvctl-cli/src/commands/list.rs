//! Show the virtualenvs visible to this project

use crate::common::VenvContext;
use crate::errors::Result;
use colored::Colorize;
use venvctl_logger as logger;

/// Print discovered virtualenvs, marking the active association
pub fn handle_list() -> Result<()> {
    let ctx = VenvContext::load()?;

    logger::spinner_start("Searching for virtualenvs...");
    let venvs = ctx.find_virtualenvs();
    logger::spinner_stop();

    let active = ctx.active_virtualenv(None);

    println!("{}", "Virtualenvs:".bold().green());
    if venvs.is_empty() {
        println!("  {}", "(none found)".yellow());
        return Ok(());
    }

    for venv in venvs {
        let label = venv.to_string_lossy().to_string();
        if label == active {
            println!("  {} {}", "*".green().bold(), label.cyan());
        } else {
            println!("    {}", label);
        }
    }

    Ok(())
}
