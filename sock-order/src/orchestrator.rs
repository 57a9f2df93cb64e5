use std::sync::Arc;

use tracing::{info, warn};

use sock_core::error::PlaceOrderError;
use sock_core::identity::{Clock, OrderIdGenerator};
use sock_core::lookup::{AddressLookup, CardLookup, CustomerLookup, ItemLookup};
use sock_core::models::{Order, Shipment};
use sock_core::payment::PaymentAuthorizer;
use sock_core::repository::OrderStore;
use sock_core::shipping::ShipmentBooker;

use crate::assembler::assemble;

/// Orchestrates one order placement end to end: concurrent entity lookups,
/// payment authorization, shipment booking, persistence.
///
/// Each call is an independent unit; the service keeps no state between
/// placements. All collaborators are injected so tests can pin the clock,
/// the id sequence, and every remote decision.
pub struct OrderService {
    customers: Arc<dyn CustomerLookup>,
    addresses: Arc<dyn AddressLookup>,
    cards: Arc<dyn CardLookup>,
    items: Arc<dyn ItemLookup>,
    payments: Arc<dyn PaymentAuthorizer>,
    shipping: Arc<dyn ShipmentBooker>,
    store: Arc<dyn OrderStore>,
    ids: Arc<dyn OrderIdGenerator>,
    clock: Arc<dyn Clock>,
}

impl OrderService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customers: Arc<dyn CustomerLookup>,
        addresses: Arc<dyn AddressLookup>,
        cards: Arc<dyn CardLookup>,
        items: Arc<dyn ItemLookup>,
        payments: Arc<dyn PaymentAuthorizer>,
        shipping: Arc<dyn ShipmentBooker>,
        store: Arc<dyn OrderStore>,
        ids: Arc<dyn OrderIdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            customers,
            addresses,
            cards,
            items,
            payments,
            shipping,
            store,
            ids,
            clock,
        }
    }

    /// Place an order from the four entity references.
    ///
    /// The four lookups run concurrently and join fail-fast: the first
    /// failure aborts the placement before any side-effecting call is made.
    /// Authorization and booking then run strictly in sequence. The order is
    /// visible in the store if and only if every step succeeded.
    pub async fn place_order(
        &self,
        customer_ref: &str,
        address_ref: &str,
        card_ref: &str,
        items_ref: &str,
    ) -> Result<Order, PlaceOrderError> {
        let order_id = self.ids.generate();
        info!(order_id = %order_id, "placement started");

        let (customer, address, card, items) = tokio::try_join!(
            self.customers.retrieve(customer_ref),
            self.addresses.retrieve(address_ref),
            self.cards.retrieve(card_ref),
            self.items.retrieve(items_ref, &order_id),
        )
        .map_err(|source| {
            warn!(order_id = %order_id, error = %source, "entity lookup failed");
            PlaceOrderError::Lookup { source }
        })?;

        let order = assemble(order_id, customer, address, card, items, self.clock.now());
        info!(order_id = %order.id, total = %order.total(), "entities joined");

        let authorization = self
            .payments
            .authorize(order.total())
            .await
            .map_err(|source| {
                warn!(order_id = %order.id, error = %source, "payment service call failed");
                PlaceOrderError::PaymentService { source }
            })?;
        if !authorization.authorised {
            warn!(order_id = %order.id, message = %authorization.message, "payment declined");
            return Err(PlaceOrderError::PaymentUnauthorized(authorization.message));
        }
        info!(order_id = %order.id, "payment authorized");

        let details = self
            .shipping
            .book(&order.id, order.item_count())
            .await
            .map_err(|source| {
                warn!(order_id = %order.id, error = %source, "shipment booking failed");
                PlaceOrderError::ShipmentBooking { source }
            })?;
        info!(order_id = %order.id, carrier = %details.carrier, "shipment booked");

        let order = order.with_shipment(Shipment {
            carrier: details.carrier,
            tracking_number: details.tracking_number,
            delivery_date: details.delivery_date,
        });

        // TODO cancel the shipment booking when the insert fails; today the
        // booking is left dangling.
        self.store.insert(&order).await.map_err(|source| {
            warn!(order_id = %order.id, error = %source, "order persistence failed");
            PlaceOrderError::Persistence { source }
        })?;

        info!(order_id = %order.id, "order persisted");
        Ok(order)
    }
}
