use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

use sock_core::error::BoxError;
use sock_core::models::{Address, Card, Customer, Item, Order, OrderStatus, Shipment};
use sock_core::repository::OrderStore;

/// Postgres-backed order store.
///
/// The insert writes the order row and all item rows inside one transaction,
/// so a placement is either fully visible or not visible at all. A duplicate
/// order id trips the primary key and surfaces as a store error.
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn insert(&self, order: &Order) -> Result<(), BoxError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, customer_id, first_name, last_name, username,
                                number, street, city, country, postcode,
                                card_long_num, card_ccv, card_expires,
                                status, carrier, tracking_number, delivery_date, date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            "#,
        )
        .bind(&order.id)
        .bind(&order.customer.id)
        .bind(&order.customer.first_name)
        .bind(&order.customer.last_name)
        .bind(&order.customer.username)
        .bind(&order.address.number)
        .bind(&order.address.street)
        .bind(&order.address.city)
        .bind(&order.address.country)
        .bind(&order.address.postcode)
        .bind(&order.card.long_num)
        .bind(&order.card.ccv)
        .bind(order.card.expires)
        .bind(order.status.as_str())
        .bind(&order.shipment.carrier)
        .bind(&order.shipment.tracking_number)
        .bind(order.shipment.delivery_date)
        .bind(order.date)
        .execute(&mut *tx)
        .await?;

        for item in &order.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (item_id, order_id, quantity, unit_price)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(&item.item_id)
            .bind(&item.order_id)
            .bind(i64::from(item.quantity))
            .bind(item.unit_price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<Order>, BoxError> {
        let row = sqlx::query(
            r#"
            SELECT id, customer_id, first_name, last_name, username,
                   number, street, city, country, postcode,
                   card_long_num, card_ccv, card_expires,
                   status, carrier, tracking_number, delivery_date, date
            FROM orders WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let item_rows = sqlx::query(
            "SELECT item_id, order_id, quantity, unit_price FROM order_items WHERE order_id = $1",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let mut items = Vec::with_capacity(item_rows.len());
        for item_row in item_rows {
            items.push(Item {
                item_id: item_row.try_get("item_id")?,
                order_id: item_row.try_get("order_id")?,
                quantity: u32::try_from(item_row.try_get::<i64, _>("quantity")?)?,
                unit_price: item_row.try_get::<Decimal, _>("unit_price")?,
            });
        }

        let status = match row.try_get::<String, _>("status")?.as_str() {
            "CREATED" => OrderStatus::Created,
            other => return Err(format!("unknown order status in store: {other}").into()),
        };

        Ok(Some(Order {
            id: row.try_get("id")?,
            customer: Customer {
                id: row.try_get("customer_id")?,
                first_name: row.try_get("first_name")?,
                last_name: row.try_get("last_name")?,
                username: row.try_get("username")?,
            },
            address: Address {
                number: row.try_get("number")?,
                street: row.try_get("street")?,
                city: row.try_get("city")?,
                country: row.try_get("country")?,
                postcode: row.try_get("postcode")?,
            },
            card: Card {
                long_num: row.try_get("card_long_num")?,
                ccv: row.try_get("card_ccv")?,
                expires: row.try_get::<NaiveDate, _>("card_expires")?,
            },
            items,
            date: row.try_get::<DateTime<Utc>, _>("date")?,
            status,
            shipment: Shipment {
                carrier: row.try_get("carrier")?,
                tracking_number: row.try_get("tracking_number")?,
                delivery_date: row.try_get::<NaiveDate, _>("delivery_date")?,
            },
        }))
    }
}
