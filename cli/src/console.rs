//! Console-backed host collaborators.
//!
//! The console host "opens" lookup tabs by printing their URLs and "copies"
//! by printing the clipboard payload, so the shell works in any terminal.

use async_trait::async_trait;
use ioclens_core::IocType;
use ioclens_intel::{Clipboard, ContextMenuHost, Result, TabHandle, TabOpener};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

pub struct ConsoleTabs {
    next_handle: AtomicU64,
}

impl ConsoleTabs {
    pub fn new() -> Self {
        Self {
            next_handle: AtomicU64::new(1),
        }
    }
}

impl Default for ConsoleTabs {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TabOpener for ConsoleTabs {
    async fn active_tab_index(&self) -> Result<u32> {
        Ok(0)
    }

    async fn open_tab(
        &self,
        url: &str,
        insertion_index: u32,
        _activate: bool,
    ) -> Result<TabHandle> {
        println!("[tab {insertion_index}] {url}");
        Ok(TabHandle(self.next_handle.fetch_add(1, Ordering::Relaxed)))
    }
}

pub struct ConsoleClipboard;

#[async_trait]
impl Clipboard for ConsoleClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        println!("[copy] {text}");
        Ok(())
    }
}

pub struct ConsoleMenu;

#[async_trait]
impl ContextMenuHost for ConsoleMenu {
    async fn remove_all(&self) -> Result<()> {
        Ok(())
    }

    async fn create(&self, ioc_type: IocType, title: &str) -> Result<()> {
        debug!("menu entry registered for {ioc_type}: {title}");
        Ok(())
    }
}
