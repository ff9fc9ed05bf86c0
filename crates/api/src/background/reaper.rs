//! Periodic removal of expired polls.
//!
//! Spawns a background task that drops every poll past its expiration
//! time. Runs on a fixed interval using `tokio::time::interval`. Request
//! handlers reject expired polls on their own, so the sweep only reclaims
//! memory; it never decides visibility.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use vanishvote_core::store::PollStore;

/// Run the expiry reaper loop.
///
/// Removes every poll whose expiration time has passed, once per
/// `interval`. Runs until `cancel` is triggered.
pub async fn run(store: Arc<PollStore>, interval: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = interval.as_secs(), "Expiry reaper started");

    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Expiry reaper stopping");
                break;
            }
            _ = ticker.tick() => {
                match store.purge_expired(Utc::now()) {
                    Ok(purged) if purged > 0 => {
                        tracing::info!(purged, "Expiry reaper: dropped expired polls");
                    }
                    Ok(_) => {
                        tracing::debug!("Expiry reaper: nothing to drop");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Expiry reaper: sweep failed");
                    }
                }
            }
        }
    }
}
