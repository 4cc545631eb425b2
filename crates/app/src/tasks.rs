//! Background tickers
//!
//! Fixed-interval polls with no backoff, retry, or jitter. Dropping the
//! returned guard aborts the task — component teardown is the only
//! cancellation path.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::pages::NewsFeed;
use crate::state::SessionStore;

/// Guard for a background ticker; aborts the task on drop
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Periodic idle check against the session store
pub fn session_watchdog(store: Arc<SessionStore>, every: Duration) -> Ticker {
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        // The first tick of a tokio interval fires immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            if store.check_expiration() {
                debug!("Idle timeout reached");
            }
        }
    });
    Ticker { handle }
}

/// Fixed-interval news feed auto-refresh
pub fn feed_refresh(feed: Arc<tokio::sync::Mutex<NewsFeed>>, every: Duration) -> Ticker {
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.tick().await;
        loop {
            interval.tick().await;
            // Failures land in the feed's own error slot; the next tick
            // simply tries again
            if feed.lock().await.refresh().await.is_err() {
                debug!("Scheduled feed refresh failed");
            }
        }
    });
    Ticker { handle }
}
