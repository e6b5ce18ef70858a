//! Settings and project association storage for venvctl
//!
//! Two persistence layers live here:
//! - [`Settings`]: process-wide configuration (creation executable, venv
//!   search directories, extra interpreter paths), stored as TOML under the
//!   user config directory. Loaded on every access so external edits are
//!   picked up immediately; saved explicitly.
//! - [`ProjectData`]: the per-project document holding the single
//!   `virtualenv` association key. Unrelated keys in the document are
//!   preserved across rewrites.

mod errors;
mod paths;
mod project;
mod settings;

pub use errors::ConfigError;
pub use paths::{expand_user, normalize_path};
pub use project::ProjectData;
pub use settings::Settings;
