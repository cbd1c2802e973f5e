// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry};

// Re-export for public API
pub use server::{health_handler, metrics_handler};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Order intake and cancellation
// - Rejected requests by reason
// - Queue depth and next delivery size
// - Duration of queue computations
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Central metrics registry for the service
pub struct Metrics {
    registry: Registry,

    // Intake Metrics
    pub orders_created: IntCounter,
    pub orders_cancelled: IntCounter,
    pub order_rejections: IntCounterVec,

    // Queue Metrics
    pub queue_depth: IntGauge,
    pub next_delivery_batch_size: IntGauge,
    pub queue_operation_duration: HistogramVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_created = IntCounter::new("orders_created_total", "Total orders accepted")?;
        registry.register(Box::new(orders_created.clone()))?;

        let orders_cancelled = IntCounter::new("orders_cancelled_total", "Total orders cancelled")?;
        registry.register(Box::new(orders_cancelled.clone()))?;

        let order_rejections = IntCounterVec::new(
            Opts::new("order_rejections_total", "Requests rejected by business rules"),
            &["reason"],
        )?;
        registry.register(Box::new(order_rejections.clone()))?;

        let queue_depth = IntGauge::new("queue_depth", "Number of active orders")?;
        registry.register(Box::new(queue_depth.clone()))?;

        let next_delivery_batch_size = IntGauge::new(
            "next_delivery_batch_size",
            "Number of orders in the most recently computed next delivery",
        )?;
        registry.register(Box::new(next_delivery_batch_size.clone()))?;

        let queue_operation_duration = HistogramVec::new(
            HistogramOpts::new("queue_operation_duration_seconds", "Queue operation duration")
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]),
            &["operation"],
        )?;
        registry.register(Box::new(queue_operation_duration.clone()))?;

        Ok(Self {
            registry,
            orders_created,
            orders_cancelled,
            order_rejections,
            queue_depth,
            next_delivery_batch_size,
            queue_operation_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_rejection(&self, reason: &str) {
        self.order_rejections.with_label_values(&[reason]).inc();
    }

    pub fn record_operation(&self, operation: &str, duration_secs: f64) {
        self.queue_operation_duration
            .with_label_values(&[operation])
            .observe(duration_secs);
    }

    pub fn set_queue_depth(&self, depth: usize) {
        self.queue_depth.set(depth as i64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        assert!(!metrics.registry.gather().is_empty());
    }

    #[test]
    fn test_record_rejection() {
        let metrics = Metrics::new().unwrap();
        metrics.record_rejection("already_exists");
        metrics.record_rejection("already_exists");
        metrics.record_rejection("not_found");

        let gathered = metrics.registry.gather();
        let rejections = gathered.iter().find(|m| m.name() == "order_rejections_total").unwrap();
        assert_eq!(rejections.metric.len(), 2); // Two different reason labels
    }

    #[test]
    fn test_queue_depth_gauge() {
        let metrics = Metrics::new().unwrap();
        metrics.set_queue_depth(3);

        let gathered = metrics.registry.gather();
        let depth = gathered.iter().find(|m| m.name() == "queue_depth").unwrap();
        assert_eq!(depth.metric[0].gauge.value, Some(3.0));
    }

    #[test]
    fn test_record_operation() {
        let metrics = Metrics::new().unwrap();
        metrics.record_operation("view_order", 0.0002);

        let gathered = metrics.registry.gather();
        let duration = gathered
            .iter()
            .find(|m| m.name() == "queue_operation_duration_seconds")
            .unwrap();
        assert_eq!(duration.metric[0].histogram.sample_count, Some(1));
    }
}
