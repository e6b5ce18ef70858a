//! Common types and utilities shared across commands

use crate::errors::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use venvctl_config::{expand_user, ProjectData, Settings};
use venvctl_logger as logger;

/// Global CLI options available to all commands
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    #[arg(short, long, global = true, help = "Decrease verbosity")]
    pub quiet: bool,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase verbosity (-v for debug, -vv for trace)")]
    pub verbose: u8,
}

impl GlobalOpts {
    /// Get the effective verbosity level
    /// - 0: quiet/warn only
    /// - 1: debug (-v)
    /// - 2: trace (-vv)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

/// Settings plus project association, loaded fresh per command invocation
///
/// Handlers receive this instead of reaching for ambient global state, so
/// each one is testable against an isolated settings/project pair (the env
/// overrides `VENVCTL_CONFIG` / `VENVCTL_PROJECT` point both stores at
/// scratch files).
pub struct VenvContext {
    pub settings: Settings,
    pub project: ProjectData,
}

impl VenvContext {
    pub fn load() -> Result<Self> {
        Ok(VenvContext {
            settings: Settings::load()?,
            project: ProjectData::load()?,
        })
    }

    /// Resolve the active virtualenv
    ///
    /// Order: explicit caller override, then the project association, then
    /// the empty string. Always tilde-expanded.
    pub fn active_virtualenv(&self, override_path: Option<&str>) -> String {
        let venv = override_path
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .or_else(|| self.project.virtualenv())
            .unwrap_or_default();

        expand_user(&venv)
    }

    /// Set or clear the association and persist the project file
    ///
    /// Emits the user-facing `ACTIVATED`/`DEACTIVATED` status line; clearing
    /// when nothing is associated stays silent.
    pub fn set_virtualenv(&mut self, venv: Option<&str>) -> Result<()> {
        match venv.filter(|path| !path.is_empty()) {
            Some(path) => {
                self.project.set_virtualenv(Some(path));
                logger::success(&format!("({}) ACTIVATED", basename(path)));
            }
            None => {
                if self.project.virtualenv().is_some() {
                    self.project.set_virtualenv(None);
                    logger::success("DEACTIVATED");
                }
            }
        }

        self.project.save()?;
        logger::info(&format!(
            "Current virtualenv set to \"{}\".",
            venv.unwrap_or("")
        ));
        Ok(())
    }

    /// Virtualenvs under the project root and the configured directories
    pub fn find_virtualenvs(&self) -> Vec<PathBuf> {
        let mut search_dirs = vec![self.project.root()];
        search_dirs.extend(self.settings.expanded_directories());
        venvctl_resolver::find_virtualenvs(&search_dirs)
    }

    /// Interpreters under the configured extra paths and `PATH`
    pub fn find_pythons(&self) -> Vec<PathBuf> {
        venvctl_resolver::find_pythons(&self.settings.expanded_extra_paths())
    }
}

/// Final path component, used for the activation status line
pub fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map_or_else(|| path.to_string(), |name| name.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_takes_the_final_component() {
        assert_eq!(basename("/home/u/env1"), "env1");
        assert_eq!(basename("env1"), "env1");
        assert_eq!(basename("/home/u/env1/"), "env1");
    }

    #[test]
    fn active_virtualenv_resolution_order() {
        let Ok(dir) = tempfile::TempDir::new() else {
            return;
        };
        let Ok(project) = ProjectData::load_at(dir.path().join("venvctl.toml")) else {
            return;
        };
        let mut ctx = VenvContext {
            settings: Settings::default(),
            project,
        };

        // Nothing set anywhere: empty string
        assert_eq!(ctx.active_virtualenv(None), "");

        // Project association is the fallback
        ctx.project.set_virtualenv(Some("/home/u/env1"));
        assert_eq!(ctx.active_virtualenv(None), "/home/u/env1");

        // An explicit override wins; an empty override does not
        assert_eq!(ctx.active_virtualenv(Some("/home/u/env2")), "/home/u/env2");
        assert_eq!(ctx.active_virtualenv(Some("")), "/home/u/env1");
    }

    #[test]
    fn set_virtualenv_persists_and_clears() {
        let Ok(dir) = tempfile::TempDir::new() else {
            return;
        };
        let path = dir.path().join("venvctl.toml");
        let Ok(project) = ProjectData::load_at(path.clone()) else {
            return;
        };
        let mut ctx = VenvContext {
            settings: Settings::default(),
            project,
        };

        assert!(ctx.set_virtualenv(Some("/home/u/env1")).is_ok());
        let Ok(reloaded) = ProjectData::load_at(path.clone()) else {
            return;
        };
        assert_eq!(reloaded.virtualenv().as_deref(), Some("/home/u/env1"));

        assert!(ctx.set_virtualenv(None).is_ok());
        let Ok(reloaded) = ProjectData::load_at(path) else {
            return;
        };
        assert!(reloaded.virtualenv().is_none());
    }

    #[test]
    fn verbosity_is_zero_when_quiet() {
        let opts = GlobalOpts {
            quiet: true,
            verbose: 2,
        };
        assert_eq!(opts.verbosity_level(), 0);
        let opts = GlobalOpts {
            quiet: false,
            verbose: 1,
        };
        assert_eq!(opts.verbosity_level(), 1);
    }
}
