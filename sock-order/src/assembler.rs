use chrono::{DateTime, Utc};
use sock_core::models::{Address, Card, Customer, Item, Order, OrderStatus, Shipment};

/// Combine the retrieved entities into a provisional order.
///
/// Pure: no I/O, no failure modes. The order starts in CREATED status with a
/// placeholder shipment; the orchestrator swaps in the real shipment once
/// booking succeeds. Precondition: `items` is non-empty (the item lookup
/// guarantees this upstream).
pub fn assemble(
    order_id: String,
    customer: Customer,
    address: Address,
    card: Card,
    items: Vec<Item>,
    now: DateTime<Utc>,
) -> Order {
    debug_assert!(!items.is_empty(), "an order needs at least one item");

    Order {
        id: order_id,
        customer,
        address,
        card,
        items,
        date: now,
        status: OrderStatus::Created,
        shipment: Shipment::placeholder(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn assembled_order_starts_created_with_placeholder_shipment() {
        let now = Utc::now();
        let order = assemble(
            "order-1".to_string(),
            Customer {
                id: "1234".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                username: "jdoe".to_string(),
            },
            Address {
                number: "123".to_string(),
                street: "Street".to_string(),
                city: "City".to_string(),
                country: "Country".to_string(),
                postcode: "1111111".to_string(),
            },
            Card {
                long_num: "4111111111111111".to_string(),
                ccv: "123".to_string(),
                expires: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            },
            vec![Item {
                item_id: "a".to_string(),
                order_id: "order-1".to_string(),
                quantity: 2,
                unit_price: Decimal::new(1715, 2),
            }],
            now,
        );

        assert_eq!(order.status, OrderStatus::Created);
        assert!(order.shipment.is_placeholder());
        assert_eq!(order.date, now);
        assert_eq!(order.total(), Decimal::new(3430, 2));
    }
}
