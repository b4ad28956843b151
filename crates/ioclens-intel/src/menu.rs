//! Context-menu synchronisation.

use crate::error::Result;
use crate::host::ContextMenuHost;
use ioclens_core::Configuration;
use tracing::debug;

/// Rebuild the host context menu to match the currently active indicator
/// types: remove every registered entry, then create one per active type in
/// key order.
///
/// Call this after the initial load and after any mutation or reload that
/// may have changed the active type set.
///
/// # Errors
/// Propagates the first host failure; entries registered before the failure
/// stay registered.
pub async fn sync_context_menus(
    config: &Configuration,
    menu: &dyn ContextMenuHost,
) -> Result<()> {
    menu.remove_all().await?;
    for (ioc_type, definition) in config.iter().filter(|(_, def)| def.active) {
        let title = format!("Investigate {}", definition.name);
        debug!("registering context menu entry for {ioc_type}");
        menu.create(*ioc_type, &title).await?;
    }
    Ok(())
}
