//! Run a build command with the active virtualenv's environment injected

use crate::common::VenvContext;
use crate::errors::{CliError, Result};
use clap::Args;
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;
use venvctl_logger as logger;
use venvctl_resolver::{activate, is_valid};

#[derive(Args, Debug, Clone)]
pub struct RunCommand {
    /// Use this virtualenv instead of the project association
    #[arg(long)]
    pub virtualenv: Option<String>,

    /// Extra environment overrides for the command (repeatable)
    #[arg(long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// The command to execute
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        required = true,
        value_name = "CMD"
    )]
    pub command: Vec<String>,
}

/// Execute the command, augmented by the active virtualenv if one is set
///
/// No association: the command runs unmodified. A corrupt or deleted
/// association is cleared on the spot and the build is cancelled without
/// spawning anything. Otherwise the activation payload is merged into the
/// child environment (activation values win on conflict) and the child's
/// exit code is returned for propagation.
pub fn handle_run(cmd: &RunCommand) -> Result<i32> {
    let mut ctx = VenvContext::load()?;
    let venv = ctx.active_virtualenv(cmd.virtualenv.as_deref());
    let overrides = parse_env_overrides(&cmd.env)?;

    let (program, args) = cmd
        .command
        .split_first()
        .ok_or_else(|| CliError::InvalidInput("No command given.".to_string()))?;
    let mut child = Command::new(program);
    child.args(args);

    if venv.is_empty() {
        child.envs(&overrides);
    } else {
        if !is_valid(Path::new(&venv)) {
            ctx.set_virtualenv(None)?;
            return Err(CliError::BuildCancelled(format!(
                "Activated virtualenv at \"{venv}\" is corrupt or has been deleted. Build cancelled!\n\
                 Choose another virtualenv and start the build again."
            )));
        }

        let activation = activate(Path::new(&venv))?;
        child.envs(merge_env(&overrides, &activation.env));
        if let Some(path_var) = activation.path_var() {
            child.env("PATH", path_var);
        }
        // A stale PYTHONHOME defeats activation
        child.env_remove("PYTHONHOME");

        logger::info(&format!("Command executed with virtualenv \"{}\".", venv));
    }

    let status = child.status()?;
    Ok(status.code().unwrap_or(1))
}

/// Parse repeated `KEY=VALUE` arguments
fn parse_env_overrides(pairs: &[String]) -> Result<HashMap<String, String>> {
    let mut overrides = HashMap::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(CliError::InvalidInput(format!(
                "Invalid --env value \"{pair}\", expected KEY=VALUE."
            )));
        };
        if key.is_empty() {
            return Err(CliError::InvalidInput(format!(
                "Invalid --env value \"{pair}\", expected KEY=VALUE."
            )));
        }
        overrides.insert(key.to_string(), value.to_string());
    }
    Ok(overrides)
}

/// Shallow merge with the activation mapping applied last
fn merge_env(
    overrides: &HashMap<String, String>,
    activation: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = overrides.clone();
    for (key, value) in activation {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
