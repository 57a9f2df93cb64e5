//! Fixed-value entity lookups.
//!
//! The upstream catalogue, user, and cart services are not wired in yet, so
//! these return the same entities for every reference. They keep the remote
//! call shape (async, fallible) so the orchestrator treats them like the real
//! thing.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use sock_core::error::BoxError;
use sock_core::lookup::{AddressLookup, CardLookup, CustomerLookup, ItemLookup};
use sock_core::models::{Address, Card, Customer, Item};

pub struct StubCustomerLookup;

#[async_trait]
impl CustomerLookup for StubCustomerLookup {
    async fn retrieve(&self, _reference: &str) -> Result<Customer, BoxError> {
        Ok(Customer {
            id: "1234".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            username: "jdoe".to_string(),
        })
    }
}

pub struct StubAddressLookup;

#[async_trait]
impl AddressLookup for StubAddressLookup {
    async fn retrieve(&self, _reference: &str) -> Result<Address, BoxError> {
        Ok(Address {
            number: "123".to_string(),
            street: "Street".to_string(),
            city: "City".to_string(),
            country: "Country".to_string(),
            postcode: "1111111".to_string(),
        })
    }
}

pub struct StubCardLookup;

#[async_trait]
impl CardLookup for StubCardLookup {
    async fn retrieve(&self, _reference: &str) -> Result<Card, BoxError> {
        Ok(Card {
            long_num: "4111111111111111".to_string(),
            ccv: "123".to_string(),
            expires: NaiveDate::from_ymd_opt(2024, 1, 1)
                .ok_or("invalid expiry date in stub")?,
        })
    }
}

pub struct StubItemLookup;

#[async_trait]
impl ItemLookup for StubItemLookup {
    async fn retrieve(&self, _reference: &str, order_id: &str) -> Result<Vec<Item>, BoxError> {
        Ok(vec![
            Item {
                item_id: "6d62d909-f957-430e-8689-b5129c0bb75e".to_string(),
                order_id: order_id.to_string(),
                quantity: 2,
                unit_price: Decimal::new(1715, 2),
            },
            Item {
                item_id: "f611b671-40a3-4020-ab7f-68d56a813dc8".to_string(),
                order_id: order_id.to_string(),
                quantity: 1,
                unit_price: Decimal::new(2000, 2),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn items_are_stamped_with_the_order_id() {
        let items = StubItemLookup.retrieve("/carts/1", "order-42").await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.order_id == "order-42"));
        assert_eq!(
            items.iter().map(Item::subtotal).sum::<Decimal>(),
            Decimal::new(5430, 2)
        );
    }
}
