use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Carrier name used by the placeholder shipment before booking happens.
pub const PLACEHOLDER_CARRIER: &str = "dummy";

/// Order status in the lifecycle
///
/// Only the initial state is modeled; further lifecycle states belong to
/// downstream services.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "CREATED",
        }
    }
}

/// The customer placing the order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

/// Delivery address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub number: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub postcode: String,
}

/// Payment card; `expires` is always a valid calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub long_num: String,
    pub ccv: String,
    pub expires: NaiveDate,
}

/// A line of an order. Belongs to exactly one order via `order_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub item_id: String,
    pub order_id: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl Item {
    /// Line subtotal: quantity × unit price.
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Shipment details attached to an order.
///
/// Starts out as a placeholder and is replaced wholesale once the carrier
/// booking succeeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shipment {
    pub carrier: String,
    pub tracking_number: String,
    pub delivery_date: NaiveDate,
}

impl Shipment {
    /// Sentinel shipment used before real booking data is available.
    pub fn placeholder() -> Self {
        Self {
            carrier: PLACEHOLDER_CARRIER.to_string(),
            tracking_number: Uuid::new_v4().to_string(),
            delivery_date: NaiveDate::MIN,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.carrier == PLACEHOLDER_CARRIER
    }
}

/// The single source of truth for a customer's purchase.
///
/// Immutable after assembly; the only "mutation" in the workflow is
/// whole-value replacement of the shipment via [`Order::with_shipment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: Customer,
    pub address: Address,
    pub card: Card,
    pub items: Vec<Item>,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
    pub shipment: Shipment,
}

impl Order {
    /// Order total: Σ quantity × unit price over all items.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(Item::subtotal).sum()
    }

    /// Total number of physical units across all items.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Replace the shipment, producing the final order.
    pub fn with_shipment(self, shipment: Shipment) -> Self {
        Self { shipment, ..self }
    }
}
