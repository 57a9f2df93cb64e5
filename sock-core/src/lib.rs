pub mod error;
pub mod identity;
pub mod lookup;
pub mod models;
pub mod payment;
pub mod repository;
pub mod shipping;

pub use error::{BoxError, PlaceOrderError};
pub use models::{Address, Card, Customer, Item, Order, OrderStatus, Shipment};
