// Order storage. The queue core only ever sees `Snapshot`s taken from here.

pub mod order_store;

pub use order_store::{InMemoryOrderStore, OrderRepository};
