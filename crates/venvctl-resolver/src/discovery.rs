//! Enumeration of virtualenvs and interpreter binaries

use crate::venv_paths::is_valid;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Matches python, python3, python3.12, python.exe, ...
static PYTHON_NAME_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^python(\d+(\.\d+)*)?(\.exe)?$").ok());

fn push_unique(found: &mut Vec<PathBuf>, path: PathBuf) {
    if !found.contains(&path) {
        found.push(path);
    }
}

/// Enumerate valid virtualenvs under the given search directories
///
/// Each search directory contributes its immediate subdirectories, sorted by
/// name; a search directory that is itself a venv contributes itself.
/// Missing or unreadable directories are skipped. Order follows the search
/// directories, duplicates are dropped.
pub fn find_virtualenvs(search_dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for dir in search_dirs {
        if is_valid(dir) {
            push_unique(&mut found, dir.clone());
            continue;
        }

        let Ok(entries) = fs::read_dir(dir) else {
            debug!("Skipping unreadable search directory {:?}", dir);
            continue;
        };

        let mut children: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect();
        children.sort();

        for child in children {
            if is_valid(&child) {
                push_unique(&mut found, child);
            }
        }
    }

    debug!("Found {} virtualenv(s)", found.len());
    found
}

/// Enumerate interpreter binaries under `extra_paths` followed by `PATH`
pub fn find_pythons(extra_paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = extra_paths.to_vec();
    if let Some(path_var) = std::env::var_os("PATH") {
        dirs.extend(std::env::split_paths(&path_var));
    }

    let mut found = Vec::new();
    for dir in dirs {
        for python in pythons_in(&dir) {
            push_unique(&mut found, python);
        }
    }

    debug!("Found {} python interpreter(s)", found.len());
    found
}

fn pythons_in(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut pythons: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| {
                        PYTHON_NAME_RE
                            .as_ref()
                            .is_some_and(|re| re.is_match(name))
                    })
        })
        .collect();
    pythons.sort();
    pythons
}
