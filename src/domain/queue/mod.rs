// ============================================================================
// Queue Core - Priority, position, wait time and next delivery
// ============================================================================
//
// Pure functions over one immutable snapshot of active orders. Nothing in
// here performs I/O, holds state between calls or fails on valid input.
//
// - classifier - premium / normal tier from the customer id
// - ordering   - the physical queue (premium first, then by creation time)
// - position   - tier-aware ahead sets and 1-based positions
// - wait       - batch-packing wait time estimation
// - batch      - next delivery batch selection
// - status     - position + wait time for a single order
//
// ============================================================================

pub mod policy;
pub mod classifier;
pub mod ordering;
pub mod position;
pub mod wait;
pub mod batch;
pub mod status;

pub use policy::QueuePolicy;
pub use ordering::order_queue;
pub use batch::select_next_batch;
pub use status::queue_status;
