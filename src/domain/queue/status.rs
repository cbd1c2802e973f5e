use super::policy::QueuePolicy;
use super::position::{ahead_set, position};
use super::wait::estimate_wait_time;
use crate::domain::order::{Order, QueueStatus};

/// Position and wait time of `target` within the snapshot `orders`
pub fn queue_status(target: &Order, orders: &[Order], policy: &QueuePolicy) -> QueueStatus {
    let ahead = ahead_set(target, orders, policy);

    QueueStatus {
        customer_id: target.customer_id(),
        quantity: target.quantity(),
        position: position(&ahead),
        wait_time: estimate_wait_time(&ahead, target, policy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::queue::test_support::order;

    #[test]
    fn test_normal_order_waits_behind_premium_population() {
        let policy = QueuePolicy::default();
        let orders = vec![order(2000, 5, 0), order(5, 10, 1), order(6, 45, 2)];

        let status = queue_status(&orders[0], &orders, &policy);
        assert_eq!(status.position, 3);
        // 10 + 45 overflows the first batch; target joins the second
        assert_eq!(status.wait_time, 10);
    }

    #[test]
    fn test_status_is_idempotent() {
        let policy = QueuePolicy::default();
        let orders = vec![order(20, 25, 0), order(3000, 30, 1), order(40, 10, 2)];

        for target in &orders {
            assert_eq!(
                queue_status(target, &orders, &policy),
                queue_status(target, &orders, &policy)
            );
        }
    }
}
