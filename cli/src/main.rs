//! ioclens console shell.
//!
//! This is the thin application shell: it wires the file-backed preference
//! store to console host collaborators and investigates the indicators
//! passed on the command line. Core business logic lives in the `crates/`
//! directory.

mod console;

use anyhow::Context;
use console::{ConsoleClipboard, ConsoleMenu, ConsoleTabs};
use ioclens_intel::{sync_context_menus, Investigator};
use ioclens_store::{JsonFileStore, PreferenceSync, SyncOptions};
use std::sync::Arc;
use tracing::{info, warn};

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,ioclens=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let indicators: Vec<String> = std::env::args().skip(1).collect();
    if indicators.is_empty() {
        eprintln!("usage: ioclens <indicator> [<indicator>...]");
        std::process::exit(2);
    }

    info!("Starting ioclens v{}", env!("CARGO_PKG_VERSION"));

    let store = JsonFileStore::with_default_path().context("resolving preference store path")?;
    let sync = Arc::new(PreferenceSync::new(store, SyncOptions::default()));
    sync.load_or_default().await;

    sync_context_menus(&sync.snapshot(), &ConsoleMenu)
        .await
        .context("registering context menu entries")?;

    let investigator = Investigator::new(
        Arc::clone(&sync),
        Arc::new(ConsoleTabs::new()),
        Arc::new(ConsoleClipboard),
    );

    let mut failures = 0usize;
    for indicator in &indicators {
        if investigator.investigate(indicator).await {
            info!("investigated {indicator}");
        } else {
            warn!("no actions taken for {indicator}");
            failures += 1;
        }
    }

    sync.flush()
        .await
        .context("flushing pending preference writes")?;

    if failures == indicators.len() {
        std::process::exit(1);
    }
    Ok(())
}
