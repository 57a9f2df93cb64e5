//! HTTP adapters for the payment and shipping services.
//!
//! The wire shapes follow the services' JSON APIs: camelCase fields, a
//! nested `authorization` object in the payment response.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sock_core::error::BoxError;
use sock_core::payment::{AuthorizationResult, PaymentAuthorizer};
use sock_core::shipping::{ShipmentBooker, ShipmentDetails};

#[derive(Debug, Serialize)]
struct AuthorizationRequest {
    // The payment service expects a JSON number, not rust_decimal's default
    // string encoding.
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

#[derive(Debug, Deserialize)]
struct AuthorizationResponse {
    authorization: AuthorizationResult,
}

pub struct HttpPaymentAuthorizer {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPaymentAuthorizer {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PaymentAuthorizer for HttpPaymentAuthorizer {
    async fn authorize(&self, amount: Decimal) -> Result<AuthorizationResult, BoxError> {
        let response: AuthorizationResponse = self
            .client
            .post(format!("{}/paymentAuth", self.base_url))
            .json(&AuthorizationRequest { amount })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.authorization)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShipmentRequest<'a> {
    order_id: &'a str,
    item_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShipmentResponse {
    carrier: String,
    tracking_number: String,
    delivery_date: NaiveDate,
}

pub struct HttpShipmentBooker {
    client: reqwest::Client,
    base_url: String,
}

impl HttpShipmentBooker {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ShipmentBooker for HttpShipmentBooker {
    async fn book(&self, order_id: &str, item_count: u32) -> Result<ShipmentDetails, BoxError> {
        let response: ShipmentResponse = self
            .client
            .post(format!("{}/shipping", self.base_url))
            .json(&ShipmentRequest {
                order_id,
                item_count,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(ShipmentDetails {
            carrier: response.carrier,
            tracking_number: response.tracking_number,
            delivery_date: response.delivery_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_amount_is_a_json_number() {
        let request = AuthorizationRequest {
            amount: Decimal::new(5430, 2),
        };
        let json = serde_json::to_value(&request).unwrap();
        let amount = &json["amount"];
        assert!(amount.is_number());
        assert!((amount.as_f64().unwrap() - 54.30).abs() < 1e-9);
    }

    #[test]
    fn shipment_request_uses_camel_case() {
        let request = ShipmentRequest {
            order_id: "order-1",
            item_count: 3,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"orderId": "order-1", "itemCount": 3})
        );
    }

    #[test]
    fn authorization_response_parses_nested_decision() {
        let raw = r#"{"authorization": {"authorised": false, "message": "insufficient funds"}}"#;
        let response: AuthorizationResponse = serde_json::from_str(raw).unwrap();
        assert!(!response.authorization.authorised);
        assert_eq!(response.authorization.message, "insufficient funds");
    }
}
