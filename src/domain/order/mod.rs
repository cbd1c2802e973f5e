// ============================================================================
// Order Domain
// ============================================================================
//
// - Value objects (CustomerId, Order, QueueStatus, DeliveryBatch, Snapshot)
// - Errors (OrderError enum)
// - Pagination (PageRequest, Page)
// - Service (OrderService: intake, cancellation and queue queries)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod page;
pub mod service;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use page::*;
pub use service::*;
