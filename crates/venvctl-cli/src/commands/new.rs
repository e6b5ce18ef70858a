//! Create a new virtualenv and activate it

use crate::common::VenvContext;
use crate::errors::Result;
use crate::prompts;
use std::path::{Path, PathBuf};
use std::process::Command;
use venvctl_config::{expand_user, normalize_path};
use venvctl_logger as logger;

/// Create a virtualenv via the configured executable
///
/// Path and interpreter come from the arguments when given; otherwise the
/// path is prompted for (defaulting into the first configured search
/// directory) and the interpreter is picked from the discovered list, with
/// "system default" meaning no `-p` flag.
///
/// The creation subprocess is spawned without waiting and the new path is
/// associated immediately, so a failed creation leaves the project pointing
/// at a venv that the next build's validation will reject and clear. That
/// ordering is inherited behavior and kept as-is.
pub fn handle_new(path: Option<String>, python: Option<String>) -> Result<()> {
    let mut ctx = VenvContext::load()?;
    let interactive = path.is_none();

    let target = match path {
        Some(path) if !path.is_empty() => path,
        _ => {
            let initial = ctx
                .settings
                .expanded_directories()
                .first()
                .map(|dir| format!("{}{}", dir.display(), std::path::MAIN_SEPARATOR))
                .unwrap_or_default();

            match prompts::input_path("Virtualenv path", &initial)? {
                Some(entered) => entered,
                None => return Ok(()),
            }
        }
    };
    let target = normalize_path(Path::new(&expand_user(&target)));

    let python = match python {
        Some(python) => Some(PathBuf::from(expand_user(&python))),
        None if interactive => pick_python(&ctx)?,
        None => None,
    };

    let argv = creation_argv(ctx.settings.executable_args()?, python.as_deref(), &target);

    logger::info(&format!("Creating virtualenv: {}", argv.join(" ")));
    let (program, args) = match argv.split_first() {
        Some(parts) => parts,
        None => return Ok(()), // executable_args guarantees at least one token
    };

    // Fire and forget: the association below does not wait for creation
    // to finish, matching the inherited flow.
    let child = Command::new(program).args(args).spawn()?;
    drop(child);

    ctx.set_virtualenv(Some(&target.to_string_lossy()))
}

/// Base executable tokens, the optional `-p` interpreter, target path last
fn creation_argv(exec: Vec<String>, python: Option<&Path>, target: &Path) -> Vec<String> {
    let mut argv = exec;
    if let Some(python) = python {
        argv.push("-p".to_string());
        argv.push(python.to_string_lossy().to_string());
    }
    argv.push(target.to_string_lossy().to_string());
    argv
}

fn pick_python(ctx: &VenvContext) -> Result<Option<PathBuf>> {
    logger::spinner_start("Searching for python interpreters...");
    let pythons = ctx.find_pythons();
    logger::spinner_stop();

    if pythons.is_empty() {
        return Ok(None);
    }

    let mut labels = vec!["(system default)".to_string()];
    labels.extend(pythons.iter().map(|p| p.to_string_lossy().to_string()));

    match prompts::select_label("Interpreter", &labels)? {
        Some(0) | None => Ok(None),
        Some(index) => Ok(pythons.get(index - 1).cloned()),
    }
}
