use std::time::Duration;

use tracing::debug;

use crate::error::ArenaError;

pub const DEFAULT_PRICE_API: &str = "https://coins.llama.fi";
pub const DEFAULT_CHAIN: &str = "ethereum";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the `/prices/current/{chain}:{id}` price endpoint.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct PriceFeed {
    http: reqwest::Client,
    base_url: String,
    chain: String,
}

impl PriceFeed {
    pub fn new(base_url: impl Into<String>, chain: impl Into<String>) -> Result<Self, ArenaError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            chain: chain.into(),
        })
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }

    /// Key the API uses for `nft_id` on this feed's chain.
    pub fn coin_key(&self, nft_id: &str) -> String {
        format!("{}:{}", self.chain, nft_id)
    }

    pub fn url_for(&self, nft_id: &str) -> String {
        format!("{}/prices/current/{}", self.base_url, self.coin_key(nft_id))
    }

    /// Fetch the current price of `nft_id`. A failed request or a body without
    /// a price for the coin is an error; there is no retry.
    pub async fn fetch_price(&self, nft_id: &str) -> Result<f64, ArenaError> {
        let url = self.url_for(nft_id);
        debug!(%url, "Requesting NFT price");

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        extract_price(&body, &self.coin_key(nft_id))?
            .ok_or_else(|| ArenaError::PriceNotFound(nft_id.to_string()))
    }
}

/// Pull `coins[key].price` out of a price API response body.
/// Returns `Ok(None)` when the body is valid JSON without a numeric price.
fn extract_price(body: &str, key: &str) -> Result<Option<f64>, serde_json::Error> {
    let parsed: serde_json::Value = serde_json::from_str(body)?;
    Ok(parsed
        .get("coins")
        .and_then(|coins| coins.get(key))
        .and_then(|coin| coin.get("price"))
        .and_then(serde_json::Value::as_f64))
}
