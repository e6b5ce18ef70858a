//! Inspect and edit the global settings

use crate::errors::{CliError, Result};
use clap::Subcommand;
use colored::Colorize;
use venvctl_config::Settings;
use venvctl_logger as logger;

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print all settings
    Show,
    /// Set a scalar setting (directories are managed via `venvctl dir`)
    Set { key: String, value: String },
    /// Print the resolved settings file path
    Path,
}

pub fn handle_config(action: Option<ConfigAction>) -> Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            let settings = Settings::load()?;
            println!("{}", "Configuration:".bold().green());
            for (key, value) in settings.values_iter() {
                println!("  {}: {}", key.cyan(), value);
            }
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let mut settings = Settings::load()?;
            if !settings.set(&key, value.clone()) {
                return Err(CliError::InvalidInput(format!(
                    "Unknown config key: {}. Currently supported keys: executable",
                    key
                )));
            }
            settings.save()?;
            logger::success(&format!("Set {} = {}", key, value));
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", Settings::path().display());
            Ok(())
        }
    }
}
