use std::collections::HashSet;

use super::classifier::{is_premium, tier, Tier};
use super::policy::QueuePolicy;
use crate::domain::order::{CustomerId, Order};

// ============================================================================
// Position Calculator - Tier-aware "ahead" sets
// ============================================================================
//
// Position is NOT the index in `order_queue`. A premium order is behind the
// premium orders created before it. A normal order is behind everything
// created before it AND behind every premium order, including premium orders
// created after it.
//
// ============================================================================

/// Orders counted as ahead of `target`. `orders` is the full snapshot and
/// contains `target`.
pub fn ahead_set<'a>(target: &Order, orders: &'a [Order], policy: &QueuePolicy) -> Vec<&'a Order> {
    match tier(target, policy) {
        Tier::Premium => premium_ahead_set(target, orders, policy),
        Tier::Normal => normal_ahead_set(target, orders, policy),
    }
}

/// earlier(target) ∩ premium
fn premium_ahead_set<'a>(target: &Order, orders: &'a [Order], policy: &QueuePolicy) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| o.created_at() < target.created_at())
        .filter(|o| is_premium(o, policy))
        .collect()
}

/// earlier(target) ∪ premium
fn normal_ahead_set<'a>(target: &Order, orders: &'a [Order], policy: &QueuePolicy) -> Vec<&'a Order> {
    let mut ahead: Vec<&Order> = orders
        .iter()
        .filter(|o| o.created_at() < target.created_at())
        .collect();
    let mut seen: HashSet<CustomerId> = ahead.iter().map(|o| o.customer_id()).collect();

    for premium in orders.iter().filter(|o| is_premium(o, policy)) {
        if seen.insert(premium.customer_id()) {
            ahead.push(premium);
        }
    }

    ahead
}

/// 1-based queue position
pub fn position(ahead: &[&Order]) -> usize {
    ahead.len() + 1
}
