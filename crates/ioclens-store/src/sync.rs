//! Debounced load/mutate/save synchronizer.
//!
//! One `PreferenceSync` owns the live in-memory [`Configuration`] for a
//! process. Mutations go through [`PreferenceSync::update`], which applies
//! the change and arms a debounced save: bursts of mutation coalesce into a
//! single persistence write, with `max_wait` as a hard upper bound on how
//! stale the persisted document can get.

use crate::error::Result;
use crate::reconcile::reconcile;
use crate::storage::SettingsStore;
use ioclens_core::Configuration;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Debounce timing for the save path.
#[derive(Debug, Clone, Copy)]
pub struct SyncOptions {
    /// Quiet period after the most recent mutation before a save fires.
    pub delay: Duration,
    /// Hard bound on staleness: a burst is flushed no later than this long
    /// after its first unflushed mutation, regardless of further calls.
    pub max_wait: Duration,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(500),
            max_wait: Duration::from_millis(1000),
        }
    }
}

struct Debounce {
    /// True while a flush task owns the current debounce window.
    armed: bool,
    /// Most recent schedule_save call.
    last_call: Instant,
    /// first unflushed call + max_wait.
    deadline: Instant,
}

/// Load/mutate/save state synchronizer over an injected [`SettingsStore`].
///
/// Constructed explicitly and shared via `Arc` by whoever wires the
/// process together; there is no global instance.
pub struct PreferenceSync<S> {
    store: Arc<S>,
    state: Arc<Mutex<Configuration>>,
    debounce: Arc<Mutex<Debounce>>,
    options: SyncOptions,
}

impl<S: SettingsStore + 'static> PreferenceSync<S> {
    /// Create a synchronizer starting from the default configuration.
    pub fn new(store: S, options: SyncOptions) -> Self {
        let now = Instant::now();
        Self {
            store: Arc::new(store),
            state: Arc::new(Mutex::new(Configuration::default())),
            debounce: Arc::new(Mutex::new(Debounce {
                armed: false,
                last_call: now,
                deadline: now,
            })),
            options,
        }
    }

    /// Load the persisted document, reconcile it against the defaults and
    /// install the result as the live state.
    ///
    /// The installed value is built from owned data; no reference to the
    /// loader's output survives the call.
    ///
    /// # Errors
    /// Propagates loader failures to the caller. The live state is left
    /// untouched on error.
    pub async fn load(&self) -> Result<Configuration> {
        let raw = self.store.get().await?;
        let merged = reconcile(&raw, &Configuration::default());
        *lock(&self.state) = merged.clone();
        debug!("configuration loaded and reconciled");
        Ok(merged)
    }

    /// Initial process-start load: a loader failure is logged and the
    /// defaults stay in place so the rest of the process keeps working.
    pub async fn load_or_default(&self) {
        if let Err(e) = self.load().await {
            warn!("initial configuration load failed, keeping defaults: {e}");
        }
    }

    /// Unconditional re-load after a storage-change notification from the
    /// host. Failures are logged; the previous state is kept.
    pub async fn on_storage_changed(&self) {
        debug!("storage change notification, reloading configuration");
        if let Err(e) = self.load().await {
            warn!("reload after storage change failed: {e}");
        }
    }

    /// Cloned copy of the current live state for read-only consumers.
    #[must_use]
    pub fn snapshot(&self) -> Configuration {
        lock(&self.state).clone()
    }

    /// Apply a mutation to the live state, then arm the debounced save.
    ///
    /// Returns once the save is scheduled; persistence happens later on the
    /// debounce timer, and saver failures are logged rather than delivered
    /// here (the call that scheduled the save has long returned by then).
    pub fn update(&self, mutate: impl FnOnce(&mut Configuration)) {
        mutate(&mut lock(&self.state));
        self.schedule_save();
    }

    fn schedule_save(&self) {
        let now = Instant::now();
        let mut debounce = lock(&self.debounce);
        debounce.last_call = now;
        if debounce.armed {
            // Existing window absorbs this call; its flush task re-checks
            // last_call when it wakes.
            return;
        }
        debounce.armed = true;
        debounce.deadline = now + self.options.max_wait;
        drop(debounce);
        self.spawn_flush_task();
    }

    fn spawn_flush_task(&self) {
        let store = Arc::clone(&self.store);
        let state = Arc::clone(&self.state);
        let debounce = Arc::clone(&self.debounce);
        let options = self.options;

        tokio::spawn(async move {
            let snapshot = loop {
                let wake_at = {
                    let d = lock(&debounce);
                    if !d.armed {
                        return; // window drained by an explicit flush
                    }
                    d.deadline.min(d.last_call + options.delay)
                };
                tokio::time::sleep_until(wake_at).await;

                let mut d = lock(&debounce);
                if !d.armed {
                    return;
                }
                let now = Instant::now();
                if now >= d.deadline || now >= d.last_call + options.delay {
                    d.armed = false;
                    drop(d);
                    // Clone before the await below: mutations landing while
                    // the save is in flight go to the next window instead of
                    // corrupting this snapshot.
                    break lock(&state).clone();
                }
                // A mutation moved the quiet period; sleep again.
            };

            match serde_json::to_value(&snapshot) {
                Ok(document) => {
                    if let Err(e) = store.set(document).await {
                        warn!("debounced save failed: {e}");
                    } else {
                        debug!("configuration persisted");
                    }
                }
                Err(e) => warn!("failed to serialize configuration snapshot: {e}"),
            }
        });
    }

    /// Persist any pending mutations immediately, disarming the debounce
    /// window. No-op when nothing is pending. Intended for shutdown paths.
    ///
    /// # Errors
    /// Unlike the debounced path, saver failures are returned to the
    /// caller here.
    pub async fn flush(&self) -> Result<()> {
        {
            let mut d = lock(&self.debounce);
            if !d.armed {
                return Ok(());
            }
            d.armed = false;
        }
        let document = serde_json::to_value(self.snapshot())?;
        self.store.set(document).await
    }

    /// Whether a debounced save is currently pending.
    #[must_use]
    pub fn save_pending(&self) -> bool {
        lock(&self.debounce).armed
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .expect("mutex poisoned: another task panicked while holding the lock")
}
