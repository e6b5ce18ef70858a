//! Centralized error types for the venvctl CLI
//!
//! Cancelled prompts and empty inputs are not errors anywhere in the tool;
//! handlers return `Ok(())` for those. Everything user-visible that must
//! abort a command flows through this enum and is rendered by `main`.

use std::io;
use thiserror::Error;
use venvctl_config::ConfigError;
use venvctl_resolver::ResolverError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolver(#[from] ResolverError),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    BuildCancelled(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_cancelled_renders_its_message_verbatim() {
        let err = CliError::BuildCancelled("Build cancelled!".to_string());
        assert_eq!(err.to_string(), "Build cancelled!");
    }

    #[test]
    fn resolver_errors_pass_through() {
        let err = CliError::from(ResolverError::NotFound("/e/env1".into()));
        assert!(err.to_string().contains("/e/env1"));
    }
}
