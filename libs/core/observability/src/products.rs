//! Product operation metrics.

use metrics::{counter, histogram};
use std::time::Duration;

pub const OUTCOME_SUCCESS: &str = "success";
pub const OUTCOME_NOT_FOUND: &str = "not_found";
pub const OUTCOME_ERROR: &str = "error";

/// Product metrics recorder
pub struct ProductMetrics;

impl ProductMetrics {
    /// Count one product operation (`create`, `list`, `get`, `delete`) by outcome.
    pub fn record_operation(operation: &'static str, outcome: &'static str) {
        counter!(
            "product_operations_total",
            "operation" => operation,
            "outcome" => outcome
        )
        .increment(1);
    }

    /// Record how long the store took to serve `operation`.
    pub fn record_store_duration(operation: &'static str, duration: Duration) {
        histogram!(
            "product_store_duration_seconds",
            "operation" => operation
        )
        .record(duration.as_secs_f64());
    }
}
