//! Trait definitions (hexagonal ports). Depend only on domain.

mod exchange;

pub use exchange::{OrderGateway, RawOrderResponse};
