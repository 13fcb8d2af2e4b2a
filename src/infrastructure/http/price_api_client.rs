use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{Chain, PriceSeries};
use futures::future::{Either, select};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

/// Compiled-in default backend host.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Deadline for one price fetch; expiry resolves the request as failed
/// instead of leaving its slot pending forever.
const FETCH_TIMEOUT_MS: u32 = 15_000;

/// REST client for the hourly prices backend. One GET per chain, idempotent,
/// no retry and no backoff.
#[derive(Debug, Clone)]
pub struct PriceApiClient {
    base_url: String,
}

impl PriceApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn hourly_prices_url(&self, chain: Chain) -> String {
        format!("{}/prices/hourly?chain={}", self.base_url, chain.query_value())
    }

    /// Fetch the hourly average price series for one chain, exactly as the
    /// backend reports it.
    pub async fn fetch_hourly_prices(&self, chain: Chain) -> FetchResult<PriceSeries> {
        let url = self.hourly_prices_url(chain);

        get_logger().info(
            LogComponent::Infrastructure("PriceAPI"),
            &format!("📡 Fetching hourly prices: {url}"),
        );

        let request = Request::get(&url).send();
        let deadline = TimeoutFuture::new(FETCH_TIMEOUT_MS);
        pin_mut!(request);
        pin_mut!(deadline);

        let response = match select(request, deadline).await {
            Either::Left((result, _)) => {
                result.map_err(|e| FetchError::Transport(format!("{e:?}")))?
            }
            Either::Right(_) => return Err(FetchError::Timeout),
        };

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let series: PriceSeries =
            response.json().await.map_err(|e| FetchError::Decode(format!("{e:?}")))?;

        get_logger().info(
            LogComponent::Infrastructure("PriceAPI"),
            &format!("✅ Received {} hourly buckets for {}", series.len(), chain),
        );

        Ok(series)
    }
}

impl Default for PriceApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_prices_url_per_chain() {
        let client = PriceApiClient::default();
        assert_eq!(
            client.hourly_prices_url(Chain::Ethereum),
            "http://localhost:3000/prices/hourly?chain=Ethereum"
        );
        assert_eq!(
            client.hourly_prices_url(Chain::Polygon),
            "http://localhost:3000/prices/hourly?chain=Polygon"
        );
    }

    #[test]
    fn base_url_is_configurable() {
        let client = PriceApiClient::new("https://prices.example.com");
        assert_eq!(
            client.hourly_prices_url(Chain::Ethereum),
            "https://prices.example.com/prices/hourly?chain=Ethereum"
        );
    }
}
