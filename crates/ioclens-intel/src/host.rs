//! Host collaborator traits.
//!
//! The host environment owns tabs, the clipboard and context menus; the
//! pipeline only ever talks to these traits. Implementations are injected
//! at wiring time.

use crate::error::Result;
use async_trait::async_trait;
use ioclens_core::IocType;

/// Opaque handle to a browsing surface opened by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabHandle(pub u64);

/// Opens browsing surfaces at explicit insertion slots.
#[async_trait]
pub trait TabOpener: Send + Sync {
    /// The slot index of the currently active surface.
    async fn active_tab_index(&self) -> Result<u32>;

    /// Open `url` at `insertion_index`. `activate` controls whether the new
    /// surface takes focus; investigation batches always pass `false`.
    async fn open_tab(&self, url: &str, insertion_index: u32, activate: bool)
        -> Result<TabHandle>;
}

/// Best-effort clipboard write in the context of the focused surface.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Context-menu registration keyed by indicator type.
#[async_trait]
pub trait ContextMenuHost: Send + Sync {
    /// Remove every menu entry this process registered.
    async fn remove_all(&self) -> Result<()>;

    /// Register one entry for an indicator type with a display title.
    async fn create(&self, ioc_type: IocType, title: &str) -> Result<()>;
}
