use std::path::{Component, Path, PathBuf};

/// Expand tilde (~) to home directory path (cross-platform)
pub fn expand_user(path: &str) -> String {
    if !path.starts_with('~') {
        return path.to_string();
    }

    match dirs::home_dir() {
        Some(home) => {
            let home_str = home.to_string_lossy();
            if path == "~" {
                home_str.to_string()
            } else if path.starts_with("~/") || path.starts_with("~\\") {
                format!("{}{}", home_str, &path[1..])
            } else {
                // ~someuser paths are not supported, return as-is
                path.to_string()
            }
        }
        None => path.to_string(),
    }
}

/// Lexically normalize a path: drop `.` components and resolve `..`
/// against preceding components where possible. No filesystem access.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
