pub mod app_config;
pub mod clients;
pub mod database;
pub mod memory;
pub mod order_repo;

pub use clients::{HttpPaymentAuthorizer, HttpShipmentBooker};
pub use database::DbClient;
pub use memory::InMemoryOrderStore;
pub use order_repo::PgOrderStore;
