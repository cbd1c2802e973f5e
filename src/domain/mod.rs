// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// - order - order value objects, errors and the order service
// - queue - pure priority / batching computations over a snapshot
//
// ============================================================================

pub mod order;
pub mod queue;
