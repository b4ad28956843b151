//! Plan execution against the host collaborators.

use crate::host::{Clipboard, TabOpener};
use crate::resolver::resolve_actions;
use ioclens_store::{PreferenceSync, SettingsStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Executes investigations: reads a configuration snapshot, resolves the
/// action plan and drives the host collaborators.
pub struct Investigator<S> {
    sync: Arc<PreferenceSync<S>>,
    tabs: Arc<dyn TabOpener>,
    clipboard: Arc<dyn Clipboard>,
}

impl<S: SettingsStore + 'static> Investigator<S> {
    /// Wire an investigator to its configuration source and host
    /// collaborators.
    pub fn new(
        sync: Arc<PreferenceSync<S>>,
        tabs: Arc<dyn TabOpener>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            sync,
            tabs,
            clipboard,
        }
    }

    /// Investigate one indicator string.
    ///
    /// Returns `true` when at least one side effect was performed and none
    /// failed. Unclassifiable input, inactive types and collaborator
    /// failures all come back as `false`; failures are logged, never
    /// raised.
    pub async fn investigate(&self, input: &str) -> bool {
        let config = self.sync.snapshot();
        let plan = resolve_actions(input, &config);
        if plan.is_empty() {
            debug!("no actions resolved for input");
            return false;
        }

        let mut ok = true;

        if let Some(text) = &plan.copy {
            if let Err(e) = self.clipboard.write_text(text).await {
                warn!("clipboard write failed: {e}");
                ok = false;
            }
        }

        if !plan.open_urls.is_empty() {
            // The starting slot is captured once per batch; a rapid batch
            // lands in contiguous slots even if the active tab changes
            // mid-batch in the host.
            match self.tabs.active_tab_index().await {
                Ok(active) => {
                    let mut insertion_index = active + 1;
                    for url in &plan.open_urls {
                        if let Err(e) = self.tabs.open_tab(url, insertion_index, false).await {
                            warn!("failed to open lookup tab for {url}: {e}");
                            ok = false;
                        }
                        insertion_index += 1;
                    }
                }
                Err(e) => {
                    warn!("could not determine active tab index: {e}");
                    ok = false;
                }
            }
        }

        ok
    }
}
