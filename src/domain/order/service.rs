use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::config::IntakeLimits;
use crate::domain::queue::{order_queue, queue_status, select_next_batch, QueuePolicy};
use crate::metrics::Metrics;
use crate::store::OrderRepository;

use super::errors::OrderError;
use super::page::{Page, PageRequest};
use super::value_objects::{CustomerId, DeliveryBatch, NewOrder, QueueStatus};

// ============================================================================
// Order Service
// ============================================================================
//
// Orchestrates: Request → Validation → Store → Snapshot → Queue core
//
// Every read takes exactly one snapshot and computes all answers against it.
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: u32,
    pub quantity: u32,
}

pub type QueuePage = Page<QueueStatus>;

pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
    policy: QueuePolicy,
    limits: IntakeLimits,
    metrics: Arc<Metrics>,
}

impl OrderService {
    pub fn new(
        repository: Arc<dyn OrderRepository>,
        policy: QueuePolicy,
        limits: IntakeLimits,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            repository,
            policy,
            limits,
            metrics,
        }
    }

    fn validate(&self, request: &CreateOrderRequest) -> Result<NewOrder, OrderError> {
        if !self.limits.accepts(request.customer_id) {
            return Err(OrderError::InvalidCustomerId(request.customer_id));
        }
        if request.quantity == 0 {
            return Err(OrderError::InvalidQuantity(request.quantity));
        }
        if request.quantity > self.policy.batch_capacity {
            return Err(OrderError::QuantityExceedsCapacity {
                quantity: request.quantity,
                capacity: self.policy.batch_capacity,
            });
        }

        Ok(NewOrder {
            customer_id: CustomerId(request.customer_id),
            quantity: request.quantity,
        })
    }

    fn rejected(&self, error: OrderError) -> OrderError {
        tracing::warn!(reason = error.reason(), error = %error, "Order request rejected");
        self.metrics.record_rejection(error.reason());
        error
    }

    /// Accept a new order and report where it landed in the queue
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<QueueStatus, OrderError> {
        let new_order = self.validate(&request).map_err(|e| self.rejected(e))?;
        let (order, snapshot) = self
            .repository
            .insert(new_order)
            .await
            .map_err(|e| self.rejected(e))?;

        // Status comes from the snapshot taken with the insert, so a cancel
        // racing this request cannot turn an accepted order into a 404
        let status = queue_status(&order, snapshot.orders(), &self.policy);

        self.metrics.orders_created.inc();
        self.metrics.set_queue_depth(snapshot.len());

        tracing::info!(
            customer_id = %order.customer_id(),
            quantity = order.quantity(),
            position = status.position,
            wait_time = status.wait_time,
            "Order created"
        );

        Ok(status)
    }

    pub async fn cancel_order(&self, customer_id: CustomerId) -> Result<(), OrderError> {
        let Some((_, remaining)) = self.repository.remove(customer_id).await else {
            return Err(self.rejected(OrderError::NotFound(customer_id)));
        };

        self.metrics.orders_cancelled.inc();
        self.metrics.set_queue_depth(remaining);

        tracing::info!(customer_id = %customer_id, "Order cancelled");
        Ok(())
    }

    pub async fn view_order(&self, customer_id: CustomerId) -> Result<QueueStatus, OrderError> {
        let started = Instant::now();
        let snapshot = self.repository.snapshot().await;

        let order = snapshot
            .find(customer_id)
            .ok_or_else(|| self.rejected(OrderError::NotFound(customer_id)))?;
        let status = queue_status(order, snapshot.orders(), &self.policy);

        self.metrics
            .record_operation("view_order", started.elapsed().as_secs_f64());
        tracing::debug!(
            customer_id = %customer_id,
            position = status.position,
            wait_time = status.wait_time,
            "Computed queue status"
        );

        Ok(status)
    }

    /// The physical queue with per-order status, one page at a time
    pub async fn view_queue(&self, request: PageRequest) -> QueuePage {
        let started = Instant::now();
        let snapshot = self.repository.snapshot().await;

        // One ahead-set build and sort per queued order: O(n^2 log n) in the
        // number of active orders, bounded by the customer id range
        let statuses: Vec<QueueStatus> = order_queue(snapshot.orders(), &self.policy)
            .into_iter()
            .map(|order| queue_status(order, snapshot.orders(), &self.policy))
            .collect();
        let page = Page::slice(statuses, request);

        self.metrics
            .record_operation("view_queue", started.elapsed().as_secs_f64());
        tracing::debug!(
            page = page.page,
            size = page.size,
            total_elements = page.total_elements,
            "Computed queue page"
        );

        page
    }

    pub async fn next_delivery(&self) -> DeliveryBatch {
        let started = Instant::now();
        let snapshot = self.repository.snapshot().await;

        let queue = order_queue(snapshot.orders(), &self.policy);
        let batch = select_next_batch(&queue, &self.policy);

        self.metrics
            .record_operation("next_delivery", started.elapsed().as_secs_f64());
        self.metrics.next_delivery_batch_size.set(batch.len() as i64);
        tracing::debug!(
            orders = batch.len(),
            total_quantity = batch.total_quantity(),
            queued = queue.len(),
            "Selected next delivery"
        );

        batch
    }
}
