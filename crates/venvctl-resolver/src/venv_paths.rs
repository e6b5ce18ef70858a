//! Platform-specific virtualenv structure
//!
//! A virtualenv is recognized by its binaries directory ("bin" on Unix,
//! "Scripts" on Windows) containing a python executable. Nothing else is
//! required; `pyvenv.cfg`-less virtualenv-created environments validate the
//! same way venv-created ones do.

use crate::errors::ResolverError;
use std::fs;
use std::path::{Path, PathBuf};

/// The name of the binaries/scripts directory in a Python venv
#[cfg(windows)]
pub const PYTHON_BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
pub const PYTHON_BIN_DIR: &str = "bin";

/// Candidate executable names in a venv
#[cfg(not(windows))]
const PYTHON_EXE_CANDIDATES: &[&str] = &["python3", "python"];
#[cfg(windows)]
const PYTHON_EXE_CANDIDATES: &[&str] = &["python.exe", "python3.exe"];

/// Resolve the Python executable inside a virtual environment
///
/// Tries the standard names first, then falls back to any python-like file
/// in the binaries directory.
pub fn resolve_python_exe(venv_path: &Path) -> Result<PathBuf, ResolverError> {
    if !venv_path.is_dir() {
        return Err(ResolverError::NotFound(venv_path.to_path_buf()));
    }

    let bin_dir = venv_path.join(PYTHON_BIN_DIR);
    if !bin_dir.is_dir() {
        return Err(ResolverError::Corrupt(format!(
            "binaries directory not found: {}",
            bin_dir.display()
        )));
    }

    for exe in PYTHON_EXE_CANDIDATES {
        let candidate = bin_dir.join(exe);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    if let Ok(entries) = fs::read_dir(&bin_dir) {
        if let Some(candidate) = entries.filter_map(|e| e.ok()).map(|e| e.path()).find(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| name.contains("python"))
                && p.is_file()
        }) {
            return Ok(candidate);
        }
    }

    Err(ResolverError::Corrupt(format!(
        "Python executable not found in {}",
        bin_dir.display()
    )))
}

/// Whether the path looks like a usable virtual environment
pub fn is_valid(venv_path: &Path) -> bool {
    resolve_python_exe(venv_path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::mock_venv;
    use tempfile::TempDir;

    #[test]
    fn resolves_python_in_mock_venv() {
        let Some(venv) = mock_venv() else { return };
        let result = resolve_python_exe(venv.path());
        assert!(result.is_ok(), "failed to resolve python exe");
        assert!(result.is_ok_and(|p| p
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.contains("python"))));
    }

    #[test]
    fn valid_venv_is_recognized() {
        let Some(venv) = mock_venv() else { return };
        assert!(is_valid(venv.path()));
    }

    #[test]
    fn missing_venv_is_invalid() {
        let missing = Path::new("/tmp/venvctl_nonexistent_venv_12345");
        assert!(!is_valid(missing));
        assert!(matches!(
            resolve_python_exe(missing),
            Err(ResolverError::NotFound(_))
        ));
    }

    #[test]
    fn plain_directory_is_not_a_venv() {
        let Ok(dir) = TempDir::new() else { return };
        assert!(!is_valid(dir.path()));
        assert!(matches!(
            resolve_python_exe(dir.path()),
            Err(ResolverError::Corrupt(_))
        ));
    }
}
