use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::BoxError;

/// What the shipping service returns for a successful booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentDetails {
    pub carrier: String,
    pub tracking_number: String,
    pub delivery_date: NaiveDate,
}

/// Books a shipment for a placed order. Invoked exactly once per placement,
/// only after payment authorization succeeded.
#[async_trait]
pub trait ShipmentBooker: Send + Sync {
    async fn book(&self, order_id: &str, item_count: u32) -> Result<ShipmentDetails, BoxError>;
}
