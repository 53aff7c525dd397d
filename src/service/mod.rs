//! Application services composing domain and ports.

mod orders;

pub use orders::OrderService;
