use serde::{Deserialize, Serialize};

use super::policy::QueuePolicy;
use crate::domain::order::{CustomerId, Order};

/// Priority tier, derived from the customer id alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Premium,
    Normal,
}

pub fn classify(customer_id: CustomerId, policy: &QueuePolicy) -> Tier {
    if customer_id.value() < policy.premium_threshold {
        Tier::Premium
    } else {
        Tier::Normal
    }
}

pub fn tier(order: &Order, policy: &QueuePolicy) -> Tier {
    classify(order.customer_id(), policy)
}

pub fn is_premium(order: &Order, policy: &QueuePolicy) -> bool {
    tier(order, policy) == Tier::Premium
}
