use async_trait::async_trait;

use crate::error::BoxError;
use crate::models::Order;

/// Repository trait for order persistence.
///
/// `insert` must be atomic: the order is either fully written or not written
/// at all. Duplicate ids and connectivity loss surface as store errors.
/// Implementations must support concurrent inserts from independent
/// placements without external locking.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert(&self, order: &Order) -> Result<(), BoxError>;

    async fn find(&self, id: &str) -> Result<Option<Order>, BoxError>;
}
