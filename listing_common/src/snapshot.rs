//! Listing snapshot returned by market-data fetches.
//!
//! A snapshot is the ephemeral result of one quote lookup. The symbol counts
//! as listed only when a snapshot exists and carries a live price; an absent
//! snapshot or a snapshot without a price both mean "not listed yet".
use serde::{Deserialize, Serialize};

/// Market snapshot for the monitored symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSnapshot {
    /// Regular market price, when the exchange reports one.
    pub price: Option<f64>,
    /// Quote currency (e.g., `USD`).
    pub currency: String,
    /// Name of the reporting exchange.
    pub exchange: String,
}

impl ListingSnapshot {
    /// Returns `true` when the snapshot carries a live price.
    pub fn has_live_price(&self) -> bool {
        self.price.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_presence_decides_listing() {
        let listed = ListingSnapshot {
            price: Some(12.50),
            currency: String::from("USD"),
            exchange: String::from("NMS"),
        };
        let pending = ListingSnapshot {
            price: None,
            currency: String::from("USD"),
            exchange: String::from("Unknown"),
        };
        assert!(listed.has_live_price());
        assert!(!pending.has_live_price());
    }
}
