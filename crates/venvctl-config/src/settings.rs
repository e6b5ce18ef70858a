use crate::errors::ConfigError;
use crate::paths::expand_user;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global venvctl settings
///
/// Stored as TOML at [`Settings::path()`]. Every accessor loads the file
/// fresh; there is no in-process cache, so edits made outside the tool are
/// picked up on the next command.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    /// Shell command line for the virtualenv-creation tool
    #[serde(default = "default_executable")]
    pub executable: String,

    /// Directories searched for existing virtualenvs, in order
    #[serde(default = "default_virtualenv_directories")]
    pub virtualenv_directories: Vec<String>,

    /// Extra directories searched for interpreter binaries, in order
    #[serde(default)]
    pub extra_paths: Vec<String>,
}

fn default_executable() -> String {
    "virtualenv".to_string()
}

fn default_virtualenv_directories() -> Vec<String> {
    vec!["~/.virtualenvs".to_string()]
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            executable: default_executable(),
            virtualenv_directories: default_virtualenv_directories(),
            extra_paths: Vec::new(),
        }
    }
}

impl Settings {
    /// Resolve the settings file location
    ///
    /// Order: `VENVCTL_CONFIG` env override (tests / isolated runs), then a
    /// `.venvctl_config_path` pointer file next to the default location,
    /// then the platform default.
    pub fn path() -> PathBuf {
        if let Ok(env_path) = std::env::var("VENVCTL_CONFIG") {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        let default = Self::default_path();

        if let Some(parent) = default.parent() {
            let pointer = parent.join(".venvctl_config_path");
            if pointer.exists() {
                if let Ok(contents) = fs::read_to_string(&pointer) {
                    let trimmed = contents.trim();
                    if !trimmed.is_empty() {
                        return PathBuf::from(trimmed);
                    }
                }
            }
        }

        default
    }

    fn default_path() -> PathBuf {
        #[cfg(not(target_os = "windows"))]
        let base = dirs::home_dir().map(|home| home.join(".config").join("venvctl"));

        #[cfg(target_os = "windows")]
        let base = dirs::config_dir().map(|config| config.join("venvctl"));

        base.unwrap_or_else(|| PathBuf::from("."))
            .join("venvctl.toml")
    }

    /// Load settings from the resolved location; a missing file yields defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path())
    }

    /// Load settings from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Settings::default())
        }
    }

    /// Persist settings to the resolved location
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path())
    }

    /// Persist settings to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The creation command split into argv tokens (shell-lexical)
    pub fn executable_args(&self) -> Result<Vec<String>, ConfigError> {
        let tokens = shell_words::split(&self.executable)
            .map_err(|e| ConfigError::InvalidExecutable(e.to_string()))?;
        if tokens.is_empty() {
            return Err(ConfigError::InvalidExecutable(
                "no executable configured".to_string(),
            ));
        }
        Ok(tokens)
    }

    /// Search directories with `~` expanded
    pub fn expanded_directories(&self) -> Vec<PathBuf> {
        self.virtualenv_directories
            .iter()
            .map(|dir| PathBuf::from(expand_user(dir)))
            .collect()
    }

    /// Extra interpreter paths with `~` expanded
    pub fn expanded_extra_paths(&self) -> Vec<PathBuf> {
        self.extra_paths
            .iter()
            .map(|dir| PathBuf::from(expand_user(dir)))
            .collect()
    }

    /// Lookup for the `config show`/`config set` surface
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "executable" => Some(self.executable.clone()),
            "virtualenv-directories" => Some(self.virtualenv_directories.join(", ")),
            "extra-paths" => Some(self.extra_paths.join(", ")),
            _ => None,
        }
    }

    /// Set a scalar key; list-valued settings are managed by `venvctl dir`
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key {
            "executable" => {
                self.executable = value;
                true
            }
            _ => false,
        }
    }

    pub fn values_iter(&self) -> Vec<(&'static str, String)> {
        vec![
            ("executable", self.executable.clone()),
            (
                "virtualenv-directories",
                self.virtualenv_directories.join(", "),
            ),
            ("extra-paths", self.extra_paths.join(", ")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().ok();
        let Some(dir) = dir else { return };
        let settings = Settings::load_from(&dir.path().join("venvctl.toml"));
        assert!(settings.is_ok());
        let Ok(settings) = settings else { return };
        assert_eq!(settings.executable, "virtualenv");
        assert_eq!(settings.virtualenv_directories, vec!["~/.virtualenvs"]);
        assert!(settings.extra_paths.is_empty());
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let Ok(dir) = TempDir::new() else { return };
        let path = dir.path().join("nested").join("venvctl.toml");

        let mut settings = Settings::default();
        settings.executable = "uv venv".to_string();
        settings.virtualenv_directories.push("/opt/envs".to_string());
        assert!(settings.save_to(&path).is_ok());

        let Ok(reloaded) = Settings::load_from(&path) else {
            unreachable!("settings should reload")
        };
        assert_eq!(reloaded.executable, "uv venv");
        assert_eq!(
            reloaded.virtualenv_directories,
            vec!["~/.virtualenvs", "/opt/envs"]
        );
    }

    #[test]
    fn executable_args_are_shell_split() {
        let mut settings = Settings::default();
        settings.executable = "uv venv --seed".to_string();
        assert_eq!(
            settings.executable_args().ok(),
            Some(vec![
                "uv".to_string(),
                "venv".to_string(),
                "--seed".to_string()
            ])
        );

        settings.executable = "'/opt/my tools/virtualenv' -q".to_string();
        assert_eq!(
            settings.executable_args().ok(),
            Some(vec!["/opt/my tools/virtualenv".to_string(), "-q".to_string()])
        );
    }

    #[test]
    fn empty_executable_is_rejected() {
        let mut settings = Settings::default();
        settings.executable = String::new();
        assert!(settings.executable_args().is_err());
    }

    #[test]
    fn directories_are_user_expanded() {
        let settings = Settings::default();
        for dir in settings.expanded_directories() {
            assert!(!dir.to_string_lossy().contains('~') || dirs::home_dir().is_none());
        }
    }

    #[test]
    fn set_rejects_unknown_keys() {
        let mut settings = Settings::default();
        assert!(settings.set("executable", "uv venv".to_string()));
        assert!(!settings.set("virtualenv-directories", "/x".to_string()));
        assert_eq!(settings.get("executable").as_deref(), Some("uv venv"));
        assert!(settings.get("bogus").is_none());
    }
}
