use super::policy::QueuePolicy;
use crate::domain::order::Order;

// ============================================================================
// Batch Wait Estimator
// ============================================================================
//
// Packs the ahead set into consecutive batches, oldest first, and reports the
// batch the target lands in. An order that exactly fills the remaining
// capacity stays in the current batch.
//
// ============================================================================

/// Estimation boundary: only a strictly larger quantity opens a new batch.
fn overflows_batch(quantity: u32, remaining: u32) -> bool {
    quantity > remaining
}

/// 1-based number of the batch `target` is delivered in
pub fn estimate_batch_number(ahead: &[&Order], target: &Order, policy: &QueuePolicy) -> u32 {
    let mut sorted = ahead.to_vec();
    sorted.sort_by_key(|o| o.created_at());

    let capacity = policy.batch_capacity;
    let mut batch = 1;
    let mut remaining = capacity;

    for previous in sorted {
        if overflows_batch(previous.quantity(), remaining) {
            batch += 1;
            remaining = capacity.saturating_sub(previous.quantity());
        } else {
            remaining -= previous.quantity();
        }
    }

    if overflows_batch(target.quantity(), remaining) {
        batch += 1;
    }

    batch
}

pub fn estimate_wait_time(ahead: &[&Order], target: &Order, policy: &QueuePolicy) -> u32 {
    policy.delivery_time_unit * estimate_batch_number(ahead, target, policy)
}
