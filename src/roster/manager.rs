use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock};
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::roster::client::SheetSource;
use crate::roster::csv::parse_csv;
use crate::roster::errors::RosterError;
use crate::roster::models::Creator;
use crate::roster::reconciler::{reconcile, RosterSettings};

/// In-memory roster store. Seeded with the starter roster, refreshed from
/// the sheet on a fixed interval, and published as an atomic snapshot swap
/// so consumers never observe a partially updated roster.
pub struct RosterManager {
    source: Arc<dyn SheetSource>,
    settings: RosterSettings,
    starter: Vec<Creator>,
    roster: RwLock<Arc<Vec<Creator>>>,
    refreshing: AtomicBool,
    cancelled: AtomicBool,
    shutdown_notify: Notify,
    poll_handle: Mutex<Option<JoinHandle<()>>>,
}

impl RosterManager {
    pub fn new(
        source: Arc<dyn SheetSource>,
        settings: RosterSettings,
        starter: Vec<Creator>,
    ) -> Arc<Self> {
        Arc::new(RosterManager {
            source,
            settings,
            roster: RwLock::new(Arc::new(starter.clone())),
            starter,
            refreshing: AtomicBool::new(false),
            cancelled: AtomicBool::new(false),
            shutdown_notify: Notify::new(),
            poll_handle: Mutex::new(None),
        })
    }

    /// Run an immediate refresh, then keep refreshing on `interval` until
    /// shutdown.
    pub async fn start(self: &Arc<Self>, interval: Duration) {
        self.refresh().await;

        let manager = Arc::clone(self);
        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {
                        if manager.cancelled.load(Ordering::SeqCst) {
                            break;
                        }
                        manager.refresh().await;
                    }
                    _ = manager.shutdown_notify.notified() => break,
                }
            }
            debug!("Roster polling task stopped");
        });
        *self.poll_handle.lock() = Some(handle);
    }

    /// One fetch-parse-reconcile-publish cycle. Failures are logged and leave
    /// the previous snapshot untouched; overlapping calls are no-ops.
    pub async fn refresh(&self) {
        if self
            .refreshing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Roster refresh already in flight, skipping");
            return;
        }
        let result = self.refresh_cycle().await;
        self.refreshing.store(false, Ordering::SeqCst);
        if let Err(e) = result {
            warn!("Roster hydration failed, keeping previous roster: {}", e);
        }
    }

    async fn refresh_cycle(&self) -> Result<(), RosterError> {
        let csv = self.source.fetch_csv().await?;
        let rows = parse_csv(&csv)?;
        let merged = reconcile(&rows, &self.starter, &self.settings);

        if self.cancelled.load(Ordering::SeqCst) {
            debug!("Discarding roster refresh result after shutdown");
            return Ok(());
        }
        if !merged.is_empty() {
            info!("Roster refreshed: {} creators", merged.len());
            *self.roster.write() = Arc::new(merged);
        }
        Ok(())
    }

    /// Current snapshot, hidden entries included.
    pub fn creators(&self) -> Arc<Vec<Creator>> {
        self.roster.read().clone()
    }

    /// Entries shown on public listings.
    pub fn visible(&self) -> Vec<Creator> {
        self.creators().iter().filter(|c| c.roster_visible).cloned().collect()
    }

    /// Direct profile lookup. Resolves hidden entries too.
    pub fn find_by_slug(&self, slug: &str) -> Option<Creator> {
        self.creators().iter().find(|c| c.slug() == slug).cloned()
    }

    /// Stop the polling task. An in-flight fetch is allowed to complete but
    /// its result is discarded.
    pub async fn shutdown(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.shutdown_notify.notify_one();
        let handle = { self.poll_handle.lock().take() };
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!("Roster polling task ended abnormally: {}", e);
            }
        }
    }
}
