use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

const PROJECT_FILE: &str = "venvctl.toml";
const VIRTUALENV_KEY: &str = "virtualenv";

/// Per-project metadata document
///
/// The document is kept as a raw TOML table: venvctl owns only the top-level
/// `virtualenv` key, and everything else in the file survives a rewrite
/// untouched. At most one virtualenv is associated at any time because the
/// association is a single key.
#[derive(Debug, Clone)]
pub struct ProjectData {
    path: PathBuf,
    table: Table,
}

impl ProjectData {
    /// Resolve the project file location
    ///
    /// `VENVCTL_PROJECT` overrides everything (tests / isolated runs).
    /// Otherwise the nearest `venvctl.toml` walking up from the current
    /// directory wins; when none exists, the current directory is where a
    /// new file will be written.
    pub fn path() -> PathBuf {
        if let Ok(env_path) = std::env::var("VENVCTL_PROJECT") {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        for dir in cwd.ancestors() {
            let candidate = dir.join(PROJECT_FILE);
            if candidate.is_file() {
                return candidate;
            }
        }

        cwd.join(PROJECT_FILE)
    }

    /// Load the project document from the resolved location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_at(Self::path())
    }

    /// Load the project document from an explicit file
    pub fn load_at(path: PathBuf) -> Result<Self, ConfigError> {
        let table = if path.exists() {
            let content = fs::read_to_string(&path)?;
            content.parse::<Table>()?
        } else {
            Table::new()
        };

        Ok(ProjectData { path, table })
    }

    /// Location of the backing file
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// The project's top-level folder (the directory holding the file)
    pub fn root(&self) -> PathBuf {
        self.path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    }

    /// The associated virtualenv path, if any
    pub fn virtualenv(&self) -> Option<String> {
        self.table
            .get(VIRTUALENV_KEY)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Set or clear the association
    ///
    /// Clearing when no association exists is a tolerated no-op.
    pub fn set_virtualenv(&mut self, venv: Option<&str>) {
        match venv {
            Some(path) if !path.is_empty() => {
                self.table
                    .insert(VIRTUALENV_KEY.to_string(), Value::String(path.to_string()));
            }
            _ => {
                self.table.remove(VIRTUALENV_KEY);
            }
        }
    }

    /// Persist the document, preserving unrelated keys
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(&self.table)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
