use super::policy::QueuePolicy;
use crate::domain::order::{DeliveryBatch, DeliveryEntry, Order};

// ============================================================================
// Next Batch Selector
// ============================================================================
//
// Fills the next cart from the head of the physical queue. An order that
// would exactly use up the remaining capacity is rejected, and selection stops
// at the first rejected order. This boundary differs from the wait estimator
// on purpose.
//
// ============================================================================

/// Selection boundary: the quantity must be strictly below what is left.
fn fits_in_cart(quantity: u32, capacity: u32) -> bool {
    quantity < capacity
}

/// `queue` is the output of `order_queue`
pub fn select_next_batch(queue: &[&Order], policy: &QueuePolicy) -> DeliveryBatch {
    let mut capacity = policy.batch_capacity;
    let mut entries = Vec::new();

    for order in queue {
        if !fits_in_cart(order.quantity(), capacity) {
            break;
        }
        capacity -= order.quantity();
        entries.push(DeliveryEntry::from(*order));
    }

    DeliveryBatch { entries }
}
