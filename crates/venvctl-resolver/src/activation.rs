//! Activation payload computation

use crate::errors::ResolverError;
use crate::venv_paths::{resolve_python_exe, PYTHON_BIN_DIR};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable pointing at the active venv root
pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";

/// The PATH/env deltas that make a venv's interpreter the effective default
///
/// `path` is the full ordered PATH entry list (venv binaries first, then the
/// inherited entries). `env` contains the variables to overlay on the child
/// environment; on key conflicts the activation value wins. Consumers should
/// also drop `PYTHONHOME` from the child environment, since a stale value
/// defeats activation.
#[derive(Debug, Clone)]
pub struct Activation {
    pub path: Vec<PathBuf>,
    pub env: HashMap<String, String>,
}

impl Activation {
    /// Join the PATH entries into a value suitable for the `PATH` variable
    pub fn path_var(&self) -> Option<OsString> {
        std::env::join_paths(self.path.iter()).ok()
    }
}

/// Compute the activation payload for a virtual environment
///
/// Fails when the venv root is missing or its structure is broken; callers
/// treat that as "corrupt or deleted" and drop the association.
pub fn activate(venv_path: &Path) -> Result<Activation, ResolverError> {
    let python = resolve_python_exe(venv_path)?;
    debug!("Activating {:?} (python at {:?})", venv_path, python);

    let mut path = vec![venv_path.join(PYTHON_BIN_DIR)];
    if let Some(current) = std::env::var_os("PATH") {
        path.extend(std::env::split_paths(&current));
    }

    let mut env = HashMap::new();
    env.insert(
        VIRTUAL_ENV_VAR.to_string(),
        venv_path.to_string_lossy().to_string(),
    );

    Ok(Activation { path, env })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::mock_venv;

    #[test]
    fn activation_prepends_venv_bin_dir() {
        let Some(venv) = mock_venv() else { return };
        let Ok(activation) = activate(venv.path()) else {
            unreachable!("mock venv should activate")
        };

        assert_eq!(
            activation.path.first(),
            Some(&venv.path().join(PYTHON_BIN_DIR))
        );
        // Inherited PATH entries follow the venv entry
        if std::env::var_os("PATH").is_some() {
            assert!(activation.path.len() > 1);
        }
    }

    #[test]
    fn activation_env_names_the_venv_root() {
        let Some(venv) = mock_venv() else { return };
        let Ok(activation) = activate(venv.path()) else {
            unreachable!("mock venv should activate")
        };

        assert_eq!(
            activation.env.get(VIRTUAL_ENV_VAR).map(String::as_str),
            Some(&*venv.path().to_string_lossy())
        );
    }

    #[test]
    fn activating_a_missing_venv_fails() {
        let missing = Path::new("/tmp/venvctl_missing_venv_55555");
        assert!(matches!(
            activate(missing),
            Err(ResolverError::NotFound(_))
        ));
    }

    #[test]
    fn path_var_round_trips_through_join_paths() {
        let Some(venv) = mock_venv() else { return };
        let Ok(activation) = activate(venv.path()) else {
            unreachable!("mock venv should activate")
        };

        let Some(joined) = activation.path_var() else {
            unreachable!("PATH entries should join")
        };
        let first = std::env::split_paths(&joined).next();
        assert_eq!(first, Some(venv.path().join(PYTHON_BIN_DIR)));
    }
}
