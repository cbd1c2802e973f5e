use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::order::{CustomerId, NewOrder, Order, OrderError, Snapshot};

// ============================================================================
// Order Repository
// ============================================================================
//
// Responsibilities:
// 1. Reject a second active order for the same customer
// 2. Stamp creation times that never go backwards
// 3. Hand out consistent snapshots of all active orders
//
// ============================================================================

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Store a new order. Fails with `AlreadyExists` if the customer already
    /// has an active order. The returned snapshot is taken under the same
    /// lock as the write and always contains the new order.
    async fn insert(&self, order: NewOrder) -> Result<(Order, Snapshot), OrderError>;

    /// Remove the customer's order, returning it and the number of orders
    /// left, if there was one
    async fn remove(&self, customer_id: CustomerId) -> Option<(Order, usize)>;

    /// Every active order at a single point in time
    async fn snapshot(&self) -> Snapshot;
}

#[derive(Default)]
struct StoreState {
    // Insertion order is the tie-break for equal creation times
    orders: Vec<Order>,
    last_issued: Option<DateTime<Utc>>,
}

impl StoreState {
    fn next_timestamp(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        let stamped = match self.last_issued {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_issued = Some(stamped);
        stamped
    }
}

/// In-process order store
pub struct InMemoryOrderStore {
    state: RwLock<StoreState>,
    clock: fn() -> DateTime<Utc>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            clock,
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderStore {
    async fn insert(&self, order: NewOrder) -> Result<(Order, Snapshot), OrderError> {
        let mut state = self.state.write().await;

        if state.orders.iter().any(|o| o.customer_id() == order.customer_id) {
            return Err(OrderError::AlreadyExists(order.customer_id));
        }

        let created_at = state.next_timestamp((self.clock)());
        let stored = Order::new(order.customer_id, order.quantity, created_at);
        state.orders.push(stored.clone());

        tracing::debug!(
            customer_id = %stored.customer_id(),
            quantity = stored.quantity(),
            created_at = %created_at,
            active_orders = state.orders.len(),
            "Stored order"
        );

        Ok((stored, Snapshot::new(state.orders.clone())))
    }

    async fn remove(&self, customer_id: CustomerId) -> Option<(Order, usize)> {
        let mut state = self.state.write().await;
        let index = state.orders.iter().position(|o| o.customer_id() == customer_id)?;
        let removed = state.orders.remove(index);

        tracing::debug!(
            customer_id = %customer_id,
            active_orders = state.orders.len(),
            "Removed order"
        );

        Some((removed, state.orders.len()))
    }

    async fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.state.read().await.orders.clone())
    }
}
