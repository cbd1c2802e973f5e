// HTTP surface: routes under /api/order plus /metrics and /health

pub mod error;
pub mod routes;

pub use routes::configure;
