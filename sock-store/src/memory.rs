use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use sock_core::error::BoxError;
use sock_core::models::Order;
use sock_core::repository::OrderStore;

/// In-memory order store for tests and local runs.
///
/// Safe for concurrent inserts from independent placements; duplicate order
/// ids are rejected the way the database's primary key would reject them.
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<String, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, order: &Order) -> Result<(), BoxError> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id) {
            return Err(format!("duplicate order id: {}", order.id).into());
        }
        orders.insert(order.id.clone(), order.clone());
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<Order>, BoxError> {
        Ok(self.orders.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use sock_core::models::{Address, Card, Customer, Item, OrderStatus, Shipment};
    use std::sync::Arc;

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            customer: Customer {
                id: "1234".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                username: "jdoe".to_string(),
            },
            address: Address {
                number: "123".to_string(),
                street: "Street".to_string(),
                city: "City".to_string(),
                country: "Country".to_string(),
                postcode: "1111111".to_string(),
            },
            card: Card {
                long_num: "4111111111111111".to_string(),
                ccv: "123".to_string(),
                expires: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            },
            items: vec![Item {
                item_id: "a".to_string(),
                order_id: id.to_string(),
                quantity: 1,
                unit_price: Decimal::new(500, 2),
            }],
            date: Utc::now(),
            status: OrderStatus::Created,
            shipment: Shipment::placeholder(),
        }
    }

    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let store = InMemoryOrderStore::new();
        store.insert(&order("o1")).await.unwrap();

        let found = store.find("o1").await.unwrap().unwrap();
        assert_eq!(found.id, "o1");
        assert!(store.find("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected() {
        let store = InMemoryOrderStore::new();
        store.insert(&order("o1")).await.unwrap();

        let err = store.insert(&order("o1")).await.unwrap_err();
        assert!(err.to_string().contains("duplicate order id"));
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_inserts_all_land() {
        let store = Arc::new(InMemoryOrderStore::new());
        let mut handles = Vec::new();

        for i in 0..100 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(&order(&format!("o{i}"))).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.count().await, 100);
    }
}
