//! Shared fixtures for resolver tests

use crate::venv_paths::PYTHON_BIN_DIR;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[cfg(not(windows))]
const MOCK_PYTHON: &str = "python3";
#[cfg(windows)]
const MOCK_PYTHON: &str = "python.exe";

/// Create a minimal venv-shaped directory tree inside `parent`
pub fn mock_venv_in(parent: &Path, name: &str) -> Option<PathBuf> {
    let venv = parent.join(name);
    let bin_dir = venv.join(PYTHON_BIN_DIR);
    fs::create_dir_all(&bin_dir).ok()?;
    fs::write(bin_dir.join(MOCK_PYTHON), "").ok()?;
    Some(venv)
}

/// Create a standalone mock venv rooted at a fresh temp directory
pub fn mock_venv() -> Option<TempDir> {
    let temp_dir = TempDir::new().ok()?;
    let bin_dir = temp_dir.path().join(PYTHON_BIN_DIR);
    fs::create_dir_all(&bin_dir).ok()?;
    fs::write(bin_dir.join(MOCK_PYTHON), "").ok()?;
    Some(temp_dir)
}
