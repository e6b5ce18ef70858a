use std::path::PathBuf;
use thiserror::Error;

/// Errors from virtualenv validation and activation
#[derive(Error, Debug, Clone)]
pub enum ResolverError {
    #[error("Virtual environment not found: {0}")]
    NotFound(PathBuf),

    #[error("Virtual environment is corrupt: {0}")]
    Corrupt(String),
}
