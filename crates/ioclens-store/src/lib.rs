//! ioclens Store - Preference persistence for the investigation tool.
//!
//! Owns the live [`Configuration`](ioclens_core::Configuration) for a
//! process and keeps it in sync with an injected storage collaborator:
//!
//! - [`storage`] - The `SettingsStore` trait plus the JSON file and
//!   in-memory backends
//! - [`reconcile`] - Schema reconciliation of raw persisted documents
//!   against the default configuration
//! - [`sync`] - The debounced load/mutate/save synchronizer
//!
//! The host environment can unload and reload the process at any time, so
//! every mutation is eventually persisted (bounded by the debounce
//! `max_wait`), and every load self-heals stale or corrupted documents by
//! reconciling them against the defaults.

pub mod error;
pub mod reconcile;
pub mod storage;
pub mod sync;

pub use error::{Result, StoreError};
pub use reconcile::reconcile;
pub use storage::{JsonFileStore, MemoryStore, SettingsStore};
pub use sync::{PreferenceSync, SyncOptions};
