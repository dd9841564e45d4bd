//! Request counters behind `GatewayMetrics`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

#[derive(Debug)]
pub(crate) struct RequestCounters {
    started_at: Instant,
    api_requests: AtomicU64,
    analyses_performed: AtomicU64,
    opportunities_found: AtomicU64,
    predictions_generated: AtomicU64,
}

impl RequestCounters {
    pub(crate) fn new() -> Self {
        Self {
            started_at: Instant::now(),
            api_requests: AtomicU64::new(0),
            analyses_performed: AtomicU64::new(0),
            opportunities_found: AtomicU64::new(0),
            predictions_generated: AtomicU64::new(0),
        }
    }

    pub(crate) fn request(&self) {
        self.api_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn analysis(&self, opportunities: usize) {
        self.analyses_performed.fetch_add(1, Ordering::Relaxed);
        self.opportunities_found
            .fetch_add(opportunities as u64, Ordering::Relaxed);
    }

    pub(crate) fn predictions(&self, count: usize) {
        self.predictions_generated
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub(crate) fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub(crate) fn api_requests(&self) -> u64 {
        self.api_requests.load(Ordering::Relaxed)
    }

    pub(crate) fn analyses_performed(&self) -> u64 {
        self.analyses_performed.load(Ordering::Relaxed)
    }

    pub(crate) fn opportunities_found(&self) -> u64 {
        self.opportunities_found.load(Ordering::Relaxed)
    }

    pub(crate) fn predictions_generated(&self) -> u64 {
        self.predictions_generated.load(Ordering::Relaxed)
    }
}
