use async_trait::async_trait;

use crate::error::BoxError;
use crate::models::{Address, Card, Customer, Item};

/// Resolves a customer reference to the customer entity.
///
/// Each lookup is an out-of-process call; the four lookups for one placement
/// are issued concurrently by the orchestrator and joined fail-fast.
#[async_trait]
pub trait CustomerLookup: Send + Sync {
    async fn retrieve(&self, reference: &str) -> Result<Customer, BoxError>;
}

#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn retrieve(&self, reference: &str) -> Result<Address, BoxError>;
}

#[async_trait]
pub trait CardLookup: Send + Sync {
    async fn retrieve(&self, reference: &str) -> Result<Card, BoxError>;
}

/// Resolves the basket reference to the order's items, stamping the freshly
/// generated order id onto each item.
#[async_trait]
pub trait ItemLookup: Send + Sync {
    async fn retrieve(&self, reference: &str, order_id: &str) -> Result<Vec<Item>, BoxError>;
}
