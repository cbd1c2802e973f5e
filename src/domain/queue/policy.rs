use serde::{Deserialize, Serialize};

// ============================================================================
// Queue Policy - Read-only constants for priority and batching
// ============================================================================

/// Constants every queue computation is parameterised by.
///
/// The core never validates these; `AppConfig::validate` does that once at
/// startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuePolicy {
    /// Customer ids strictly below this value are premium
    pub premium_threshold: u32,
    /// Total quantity one delivery batch can carry
    pub batch_capacity: u32,
    /// Time one delivery batch takes
    pub delivery_time_unit: u32,
}

impl Default for QueuePolicy {
    fn default() -> Self {
        Self {
            premium_threshold: 1000,
            batch_capacity: 50,
            delivery_time_unit: 5,
        }
    }
}
