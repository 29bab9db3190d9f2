//! Listing fetch capability and its Yahoo Finance implementation.
//!
//! The orchestrator only sees the `ListingFetcher` trait. The production
//! implementation asks the public Yahoo Finance chart endpoint for the
//! symbol and reduces the response to a `ListingSnapshot`:
//!
//! - transport failure (connect error, timeout) — surfaced as an error so
//!   the tick performs no sends and mutates no state;
//! - non-200 response or a body that does not decode — logged warning and
//!   treated as "no snapshot";
//! - decoded metadata — snapshot carrying the price (possibly absent),
//!   currency, and exchange name.
//!
//! Every call is synchronous with a hard timeout, so a slow upstream fails
//! fast instead of stalling the trigger host.

use listing_common::config::FETCH_TIMEOUT_SECS;
use listing_common::snapshot::ListingSnapshot;
use listing_common::Result;
use log::{debug, warn};
use serde::Deserialize;
use std::time::Duration;

/// Yahoo Finance chart endpoint; the symbol is appended as a path segment.
pub const CHART_ENDPOINT: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Browser-like agent string; the chart endpoint rejects the default one.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Capability consumed by the orchestrator to look up the listing status.
///
/// `Ok(None)` means the upstream answered but reported no snapshot for the
/// symbol; an `Err` means the lookup itself failed and nothing can be said
/// about the listing status this tick.
pub trait ListingFetcher {
    /// Fetch the current snapshot for `ticker`.
    fn fetch(&self, ticker: &str) -> Result<Option<ListingSnapshot>>;
}

impl<F: ListingFetcher + ?Sized> ListingFetcher for &F {
    fn fetch(&self, ticker: &str) -> Result<Option<ListingSnapshot>> {
        (**self).fetch(ticker)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Option<ChartEnvelope>,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: Option<ChartMeta>,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
    currency: Option<String>,
    #[serde(rename = "exchangeName")]
    exchange_name: Option<String>,
}

impl ChartMeta {
    fn into_snapshot(self) -> ListingSnapshot {
        ListingSnapshot {
            price: self.regular_market_price,
            currency: self.currency.unwrap_or_else(|| String::from("USD")),
            exchange: self.exchange_name.unwrap_or_else(|| String::from("Unknown")),
        }
    }
}

/// `ListingFetcher` backed by the Yahoo Finance chart API.
pub struct YahooChartFetcher {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooChartFetcher {
    /// Build a fetcher against the public Yahoo endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(CHART_ENDPOINT)
    }

    /// Build a fetcher against an alternative endpoint (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(YahooChartFetcher {
            client,
            base_url: base_url.into(),
        })
    }
}

impl ListingFetcher for YahooChartFetcher {
    fn fetch(&self, ticker: &str) -> Result<Option<ListingSnapshot>> {
        let url = format!("{}/{}", self.base_url, ticker);
        debug!("Fetching chart data from {}", url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!("Chart API call for {} failed: HTTP {}", ticker, status);
            return Ok(None);
        }

        let body: ChartResponse = match response.json() {
            Ok(body) => body,
            Err(e) => {
                warn!("Chart API response for {} did not decode: {}", ticker, e);
                return Ok(None);
            }
        };

        let meta = body
            .chart
            .and_then(|envelope| envelope.result)
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .and_then(|result| result.meta);

        match meta {
            Some(meta) => Ok(Some(meta.into_snapshot())),
            None => {
                debug!("Chart API returned no result for {}", ticker);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher_for(server: &mockito::ServerGuard) -> YahooChartFetcher {
        YahooChartFetcher::with_base_url(server.url()).unwrap()
    }

    #[test]
    fn listed_symbol_yields_a_priced_snapshot() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/FRMI")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"chart":{"result":[{"meta":{
                    "regularMarketPrice":12.5,
                    "currency":"USD",
                    "exchangeName":"NMS"
                }}]}}"#,
            )
            .create();

        let snapshot = fetcher_for(&server).fetch("FRMI").unwrap().unwrap();
        assert_eq!(snapshot.price, Some(12.5));
        assert_eq!(snapshot.currency, "USD");
        assert_eq!(snapshot.exchange, "NMS");
    }

    #[test]
    fn missing_price_still_yields_a_snapshot_without_listing() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/FRMI")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"chart":{"result":[{"meta":{"currency":"USD"}}]}}"#)
            .create();

        let snapshot = fetcher_for(&server).fetch("FRMI").unwrap().unwrap();
        assert!(!snapshot.has_live_price());
        assert_eq!(snapshot.exchange, "Unknown");
    }

    #[test]
    fn empty_result_set_means_not_listed() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/FRMI")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"chart":{"result":[]}}"#)
            .create();

        assert!(fetcher_for(&server).fetch("FRMI").unwrap().is_none());
    }

    #[test]
    fn non_200_is_tolerated_as_absent() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/FRMI")
            .with_status(502)
            .with_body("bad gateway")
            .create();

        assert!(fetcher_for(&server).fetch("FRMI").unwrap().is_none());
    }

    #[test]
    fn malformed_body_is_tolerated_as_absent() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/FRMI")
            .with_status(200)
            .with_body("<html>definitely not json</html>")
            .create();

        assert!(fetcher_for(&server).fetch("FRMI").unwrap().is_none());
    }

    #[test]
    fn unreachable_endpoint_is_a_fetch_error() {
        // Nothing listens on this port; the connect fails fast.
        let fetcher = YahooChartFetcher::with_base_url("http://127.0.0.1:1").unwrap();
        assert!(fetcher.fetch("FRMI").is_err());
    }
}
