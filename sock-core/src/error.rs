/// Boxed error type used at collaborator boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong during a single order placement.
///
/// Each variant maps to one stage of the placement workflow, so the caller
/// always learns which stage failed and why. The authorizer's decline message
/// is carried verbatim for display.
#[derive(Debug, thiserror::Error)]
pub enum PlaceOrderError {
    #[error("entity lookup failed: {source}")]
    Lookup {
        #[source]
        source: BoxError,
    },

    #[error("payment declined: {0}")]
    PaymentUnauthorized(String),

    #[error("payment service call failed: {source}")]
    PaymentService {
        #[source]
        source: BoxError,
    },

    #[error("shipment booking failed: {source}")]
    ShipmentBooking {
        #[source]
        source: BoxError,
    },

    #[error("order persistence failed: {source}")]
    Persistence {
        #[source]
        source: BoxError,
    },
}

impl PlaceOrderError {
    /// Name of the workflow stage the failure belongs to.
    pub fn stage(&self) -> &'static str {
        match self {
            PlaceOrderError::Lookup { .. } => "lookup",
            PlaceOrderError::PaymentUnauthorized(_) => "authorization",
            PlaceOrderError::PaymentService { .. } => "authorization",
            PlaceOrderError::ShipmentBooking { .. } => "shipping",
            PlaceOrderError::Persistence { .. } => "persistence",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decline_message_is_preserved() {
        let err = PlaceOrderError::PaymentUnauthorized("insufficient funds".to_string());
        assert_eq!(err.to_string(), "payment declined: insufficient funds");
        assert_eq!(err.stage(), "authorization");
    }

    #[test]
    fn source_is_chained() {
        let err = PlaceOrderError::Lookup {
            source: "connection refused".into(),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.stage(), "lookup");
    }
}
