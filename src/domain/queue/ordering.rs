use super::classifier::is_premium;
use super::policy::QueuePolicy;
use crate::domain::order::Order;

// ============================================================================
// Queue Orderer - The physical queue used for delivery selection
// ============================================================================

/// Every order exactly once: premium orders first, then normal orders, each
/// tier ascending by creation time. Ties keep snapshot order.
pub fn order_queue<'a>(orders: &'a [Order], policy: &QueuePolicy) -> Vec<&'a Order> {
    let (mut premium, mut normal): (Vec<&Order>, Vec<&Order>) =
        orders.iter().partition(|o| is_premium(o, policy));

    // sort_by_key is stable
    premium.sort_by_key(|o| o.created_at());
    normal.sort_by_key(|o| o.created_at());

    premium.extend(normal);
    premium
}
