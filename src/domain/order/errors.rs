use super::value_objects::CustomerId;

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Customer {0} has an existing order")]
    AlreadyExists(CustomerId),

    #[error("No order has been created by customer {0}")]
    NotFound(CustomerId),

    #[error("Invalid customer id: {0}")]
    InvalidCustomerId(u32),

    #[error("Invalid order quantity: {0}")]
    InvalidQuantity(u32),

    #[error("The order exceeds the maximum quantity available to buy: {capacity} (requested {quantity})")]
    QuantityExceedsCapacity { quantity: u32, capacity: u32 },

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl OrderError {
    /// Short label used for metrics and logs
    pub fn reason(&self) -> &'static str {
        match self {
            OrderError::AlreadyExists(_) => "already_exists",
            OrderError::NotFound(_) => "not_found",
            OrderError::InvalidCustomerId(_) => "invalid_customer_id",
            OrderError::InvalidQuantity(_) => "invalid_quantity",
            OrderError::QuantityExceedsCapacity { .. } => "exceeds_capacity",
            OrderError::MalformedRequest(_) => "malformed_request",
        }
    }
}
