//! venvctl library - expose modules for testing
//!
//! This library exposes the command handlers and shared helpers needed for
//! unit and integration tests.

pub mod commands;
pub mod common;
pub mod errors;
pub mod prompts;

pub use common::GlobalOpts;
