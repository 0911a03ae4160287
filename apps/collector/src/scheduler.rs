//! Fixed-interval ingestion scheduler.
//!
//! Runs the snapshot and candle collectors back to back on every tick.
//! There is no retry backoff; the interval itself is the retry delay.

use std::future::Future;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, warn};

use crate::main_lib::AppState;

pub struct Scheduler {
    state: AppState,
    poll_interval: Duration,
}

impl Scheduler {
    pub fn new(state: AppState, poll_interval: Duration) -> Self {
        Self {
            state,
            poll_interval,
        }
    }

    /// Drive ingestion cycles until `shutdown` resolves.
    ///
    /// Collector errors are logged and never leave the running state; only
    /// the shutdown future does. Cancellation is observed between cycles, so
    /// a collector call already in flight runs to completion before the
    /// scheduler stops.
    pub async fn run(self, shutdown: impl Future<Output = ()>) {
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!(
            "Ingestion scheduler started ({}s interval)",
            self.poll_interval.as_secs()
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => self.run_cycle().await,
                _ = &mut shutdown => {
                    info!("Shutdown signal received, stopping scheduler");
                    break;
                }
            }
        }

        info!("Ingestion scheduler stopped");
    }

    /// One full cycle. Snapshots run first: candle collection depends on the
    /// symbols they discover.
    async fn run_cycle(&self) {
        match self.state.snapshot_collector.run().await {
            Ok(count) => info!("Snapshot cycle complete: {} assets captured", count),
            Err(e) => error!("Snapshot cycle failed: {}", e),
        }

        match self.state.candle_collector.run().await {
            Ok(result) if result.is_success() => {
                info!("Candle cycle complete: {}", result.summary())
            }
            Ok(result) => {
                warn!("Candle cycle completed with failures: {}", result.summary());
                for outcome in result.outcomes.iter().filter(|o| o.error.is_some()) {
                    warn!(
                        "  {}: {}",
                        outcome.symbol,
                        outcome.error.as_deref().unwrap_or("unknown")
                    );
                }
            }
            Err(e) => error!("Candle cycle failed: {}", e),
        }
    }
}
