//! Clear the project's virtualenv association

use crate::common::VenvContext;
use crate::errors::Result;
use venvctl_logger as logger;

/// Deactivate the current virtualenv
///
/// With nothing active this is a tolerated no-op: the editor origin of this
/// flow hid the command instead, but a subcommand cannot be hidden.
pub fn handle_deactivate() -> Result<()> {
    let mut ctx = VenvContext::load()?;

    if ctx.active_virtualenv(None).is_empty() {
        logger::debug("No virtualenv is active; nothing to deactivate.");
        return Ok(());
    }

    ctx.set_virtualenv(None)
}
