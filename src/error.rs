use thiserror::Error;

/// Unified error type for nft-arena operations.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("NFT price must be a positive number, got {0}")]
    InvalidPrice(f64),

    #[error("Price API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("No price feed found for NFT: {0}")]
    PriceNotFound(String),
}
