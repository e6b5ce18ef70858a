//! Virtualenv discovery, validation and activation
//!
//! This crate is the filesystem-facing half of venvctl: it knows what a
//! virtual environment looks like on each platform, enumerates environments
//! under a set of search directories, locates interpreter binaries, and
//! computes the PATH/env deltas needed to make an environment's interpreter
//! the effective default for a spawned process.
//!
//! Validation is deliberately lazy: callers hold venv paths as opaque
//! identifiers and validate at use time, so a deleted or corrupted venv is
//! only surfaced when something actually depends on it.

mod activation;
mod discovery;
mod errors;
mod venv_paths;

#[cfg(test)]
pub(crate) mod test_support;

pub use activation::{activate, Activation, VIRTUAL_ENV_VAR};
pub use discovery::{find_pythons, find_virtualenvs};
pub use errors::ResolverError;
pub use venv_paths::{is_valid, resolve_python_exe, PYTHON_BIN_DIR};
