//! Cache Reaper Task
//!
//! Background task that periodically evicts cache entries older than the
//! reap interval.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

// == Reaper Handle ==
/// Handle for stopping a running reaper.
///
/// Dropping the handle signals the task to stop as well, so a reaper never
/// outlives the cache that owns it.
#[derive(Debug)]
pub struct ReaperHandle {
    /// Sender to signal shutdown
    shutdown_tx: watch::Sender<bool>,
    /// Task handle, taken by the first `shutdown` call
    task: Mutex<Option<JoinHandle<()>>>,
}

impl ReaperHandle {
    /// Signals the reaper to stop without waiting for it.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Signals the reaper to stop and waits until the task has exited.
    ///
    /// Calling this more than once is harmless.
    pub async fn shutdown(&self) {
        self.stop();

        let task = match self.task.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        if let Some(task) = task {
            if let Err(err) = task.await {
                warn!("Cache reaper ended abnormally: {}", err);
            }
        }
    }

    /// Returns true while the reaper task is still running.
    pub fn is_running(&self) -> bool {
        match self.task.lock() {
            Ok(guard) => guard.as_ref().is_some_and(|task| !task.is_finished()),
            Err(_) => false,
        }
    }
}

impl Drop for ReaperHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

// == Spawn ==
/// Spawns the reaper for `store`.
///
/// Every `reap_interval` the task takes the write lock once and removes all
/// entries older than the store's TTL. The first sweep happens one full
/// interval after spawning.
///
/// Must be called from within a tokio runtime.
pub fn spawn_reaper(store: Arc<RwLock<CacheStore>>, reap_interval: Duration) -> ReaperHandle {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let task = tokio::spawn(run(store, reap_interval, shutdown_rx));

    ReaperHandle {
        shutdown_tx,
        task: Mutex::new(Some(task)),
    }
}

/// Runs the reaper loop until shutdown is signalled.
async fn run(
    store: Arc<RwLock<CacheStore>>,
    reap_interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    // A zero period is rejected by the timer
    let period = reap_interval.max(Duration::from_millis(1));
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("Starting cache reaper with interval {:?}", period);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let removed = {
                    let mut guard = store.write().await;
                    // Read the clock under the lock so no write can slip in between
                    guard.reap(Instant::now())
                };

                if removed > 0 {
                    info!("Cache reaper: removed {} expired entries", removed);
                } else {
                    debug!("Cache reaper: no expired entries found");
                }
            }
            result = shutdown_rx.changed() => {
                if result.is_err() || *shutdown_rx.borrow() {
                    info!("Cache reaper shutting down");
                    break;
                }
            }
        }
    }
}
