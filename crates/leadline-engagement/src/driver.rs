//! Async driver for the engagement tracker
//!
//! Owns the per-page-view tracker, polls elapsed time on a fixed interval,
//! and fans resulting events out to the configured sinks. The polling task
//! is stopped through a shutdown channel so component teardown does not
//! leak timers.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::time::{self, Duration, Instant};
use tracing::debug;

use leadline_analytics::SinkSet;

use crate::tracker::EngagementTracker;

/// Time polling interval
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Drives an [`EngagementTracker`] against wall-clock time
pub struct EngagementDriver {
    tracker: Arc<Mutex<EngagementTracker>>,
    page_start: Arc<Mutex<Instant>>,
    sinks: SinkSet,
    shutdown_tx: Option<mpsc::Sender<()>>,
    poll_task: Option<tokio::task::JoinHandle<()>>,
}

impl EngagementDriver {
    /// Create a driver for the given initial path
    pub fn new(path: impl Into<String>, sinks: SinkSet) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(EngagementTracker::new(path))),
            page_start: Arc::new(Mutex::new(Instant::now())),
            sinks,
            shutdown_tx: None,
            poll_task: None,
        }
    }

    /// Start the time-on-page polling loop
    pub fn start(&mut self) {
        if self.poll_task.is_some() {
            return;
        }

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);
        self.shutdown_tx = Some(shutdown_tx);

        let tracker = Arc::clone(&self.tracker);
        let page_start = Arc::clone(&self.page_start);
        let sinks = self.sinks.clone();

        let task = tokio::spawn(async move {
            let mut interval = time::interval(POLL_INTERVAL);
            // The first tick completes immediately; skip it
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let seconds = page_start.lock().elapsed().as_secs();
                        let events = tracker.lock().record_time(seconds);
                        sinks.dispatch_all(&events).await;
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("Engagement driver shutting down");
                        break;
                    }
                }
            }
        });

        self.poll_task = Some(task);
    }

    /// Stop the polling loop and drop the task
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(()).await;
        }
        if let Some(task) = self.poll_task.take() {
            let _ = task.await;
        }
    }

    /// Route change: reset dedup state and restart the page clock
    pub async fn navigate(&self, path: impl Into<String>) {
        *self.page_start.lock() = Instant::now();
        let events = self.tracker.lock().navigate(path);
        self.sinks.dispatch_all(&events).await;
    }

    /// Scroll position observation
    pub async fn scroll(&self, scroll_top: f64, document_height: f64, window_height: f64) {
        let events = self
            .tracker
            .lock()
            .record_scroll(scroll_top, document_height, window_height);
        self.sinks.dispatch_all(&events).await;
    }

    /// Page unload: send the best-effort final time beacon
    ///
    /// Also stops the polling loop, so an unloading page never leaves a
    /// timer running.
    pub async fn unload(&mut self) {
        let seconds = self.page_start.lock().elapsed().as_secs();
        let events = self.tracker.lock().record_unload(seconds);
        self.sinks.dispatch_all(&events).await;
        self.stop().await;
    }

    /// Seconds since the current page view started
    pub fn seconds_on_page(&self) -> u64 {
        self.page_start.lock().elapsed().as_secs()
    }
}

impl Drop for EngagementDriver {
    fn drop(&mut self) {
        if let Some(task) = self.poll_task.take() {
            task.abort();
        }
    }
}
