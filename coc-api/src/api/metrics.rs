use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Simple counter used to log the amount of API requests performed.
#[derive(Debug)]
pub struct RequestMetrics {
    start: Instant,
    count: AtomicU64,
    name: &'static str,
}

impl RequestMetrics {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            count: AtomicU64::new(0),
            name,
        })
    }

    pub fn inc(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Average requests per minute since creation.
    pub fn per_minute(&self) -> f64 {
        let elapsed_min = self.start.elapsed().as_secs_f64() / 60.0;
        if elapsed_min > 0.0 {
            self.total() as f64 / elapsed_min
        } else {
            0.0
        }
    }

    pub fn log_summary(&self) {
        tracing::info!(
            client = self.name,
            "📊 {} requests executed (avg {:.2} req/min)",
            self.total(),
            self.per_minute()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inc_increases_count() {
        let metrics = RequestMetrics::new("test");
        metrics.inc();
        metrics.inc();

        assert_eq!(metrics.total(), 2);
    }

    #[test]
    fn per_minute_is_finite_right_after_creation() {
        let metrics = RequestMetrics::new("test");
        metrics.inc();

        assert!(metrics.per_minute().is_finite());
        metrics.log_summary();
    }
}
