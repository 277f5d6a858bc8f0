//! Tool for looking up an NFT's current market price.

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::error::ArenaError;
use crate::price::PriceFeed;

/// Fetches the current price of an NFT from the price API.
pub struct GetNftPrice {
    pub(crate) feed: PriceFeed,
}

impl GetNftPrice {
    pub fn new(feed: PriceFeed) -> Self {
        Self { feed }
    }
}

/// Arguments for [`GetNftPrice`].
#[derive(Debug, Deserialize)]
pub struct GetNftPriceArgs {
    /// Contract address or token id of the NFT.
    pub nft_id: String,
}

/// Latest known price of an NFT.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct NftPrice {
    pub nft_id: String,
    pub chain: String,
    /// Price in the feed's quote currency (USD).
    pub price: f64,
}

impl Tool for GetNftPrice {
    const NAME: &'static str = "get_nft_price";
    type Error = ArenaError;
    type Args = GetNftPriceArgs;
    type Output = NftPrice;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: "get_nft_price".to_string(),
            description: format!(
                "Get the current market price of an NFT on the {} blockchain by its contract \
                 address or token id. Use the result as input to the battle tools.",
                self.feed.chain()
            ),
            parameters: json!({
                "type": "object",
                "properties": {
                    "nft_id": {
                        "type": "string",
                        "description": "The unique identifier (contract address or token ID) of the NFT"
                    }
                },
                "required": ["nft_id"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        let price = self.feed.fetch_price(&args.nft_id).await?;
        debug!(nft_id = %args.nft_id, price, "Fetched NFT price");
        Ok(NftPrice {
            nft_id: args.nft_id,
            chain: self.feed.chain().to_string(),
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args: GetNftPriceArgs = serde_json::from_str(r#"{"nft_id":"0xabc"}"#).unwrap();
        assert_eq!(args.nft_id, "0xabc");
    }

    #[test]
    fn test_parse_args_missing_id() {
        assert!(serde_json::from_str::<GetNftPriceArgs>("{}").is_err());
    }

    #[tokio::test]
    async fn test_definition_names_chain() {
        let feed = PriceFeed::new("http://127.0.0.1:1", "base").unwrap();
        let def = GetNftPrice::new(feed).definition(String::new()).await;
        assert_eq!(def.name, "get_nft_price");
        assert!(def.description.contains("base blockchain"));
        assert_eq!(def.parameters["required"][0], "nft_id");
    }

    #[tokio::test]
    async fn test_call_propagates_http_failure() {
        let feed = PriceFeed::new("http://127.0.0.1:1", "ethereum").unwrap();
        let err = GetNftPrice::new(feed)
            .call(GetNftPriceArgs {
                nft_id: "0xabc".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ArenaError::Http(_)));
    }
}
