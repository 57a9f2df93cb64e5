use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BoxError;

/// The payment service's decision for one authorization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationResult {
    pub authorised: bool,
    pub message: String,
}

/// Authorizes payment of the order total. Called exactly once per placement.
///
/// An `Err` means the call itself failed (network, malformed response); a
/// decline comes back as `Ok` with `authorised == false`.
#[async_trait]
pub trait PaymentAuthorizer: Send + Sync {
    async fn authorize(&self, amount: Decimal) -> Result<AuthorizationResult, BoxError>;
}
