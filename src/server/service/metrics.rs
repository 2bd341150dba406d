//! Process-wide service counters reported by the status endpoints.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Uptime, uptime-monitor pings and bot connection state.
///
/// Shared between the HTTP server and the bot through an `Arc`.
#[derive(Debug)]
pub struct ServiceMetrics {
    started_at: Instant,
    uptime_pings: AtomicU64,
    bot_connected: AtomicBool,
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            uptime_pings: AtomicU64::new(0),
            bot_connected: AtomicBool::new(false),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Counts one uptime ping and returns the new total.
    pub fn record_uptime_ping(&self) -> u64 {
        self.uptime_pings.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn set_bot_connected(&self, connected: bool) {
        self.bot_connected.store(connected, Ordering::Relaxed);
    }

    pub fn bot_connected(&self) -> bool {
        self.bot_connected.load(Ordering::Relaxed)
    }
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}
