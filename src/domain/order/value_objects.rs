use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Customer identifier; at most one active order exists per customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u32);

impl CustomerId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated order data that has not been stamped by the store yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub quantity: u32,
}

/// An active order. Immutable between creation and cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    customer_id: CustomerId,
    quantity: u32,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(customer_id: CustomerId, quantity: u32, created_at: DateTime<Utc>) -> Self {
        Self {
            customer_id,
            quantity,
            created_at,
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Queue status of a single order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStatus {
    pub customer_id: CustomerId,
    pub quantity: u32,
    /// 1-based position
    pub position: usize,
    pub wait_time: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryEntry {
    pub customer_id: CustomerId,
    pub quantity: u32,
}

impl From<&Order> for DeliveryEntry {
    fn from(order: &Order) -> Self {
        Self {
            customer_id: order.customer_id(),
            quantity: order.quantity(),
        }
    }
}

/// Orders loaded into the next physical delivery, in loading order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryBatch {
    pub entries: Vec<DeliveryEntry>,
}

impl DeliveryBatch {
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Point-in-time copy of every active order, in store insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    orders: Vec<Order>,
}

impl Snapshot {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn find(&self, customer_id: CustomerId) -> Option<&Order> {
        self.orders.iter().find(|o| o.customer_id() == customer_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
