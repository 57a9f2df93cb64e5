use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Produces unique order identifiers.
///
/// Implementations must be collision-free with overwhelming probability
/// across concurrent invocations and must never fail. Injected rather than
/// global so tests can pin ids.
pub trait OrderIdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random 128-bit identifiers, string-encoded.
pub struct UuidOrderIdGenerator;

impl OrderIdGenerator for UuidOrderIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Source of the order creation timestamp. Injected for determinism in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_distinct() {
        let generator = UuidOrderIdGenerator;
        let ids: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
