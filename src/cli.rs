use clap::{Parser, Subcommand};

use crate::price::{DEFAULT_CHAIN, DEFAULT_PRICE_API};

#[derive(Parser)]
#[command(name = "nft-arena")]
#[command(about = "Tavern-keeper AI agent for NFT fighting-power estimates and arena battles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Claude model override
    #[arg(long, global = true, env = "ARENA_MODEL")]
    pub model: Option<String>,

    /// Seed for battle randomness (omit for a fresh random seed)
    #[arg(long, global = true, env = "ARENA_SEED")]
    pub seed: Option<u64>,

    /// Base URL of the NFT price API
    #[arg(long, global = true, env = "ARENA_PRICE_API", default_value = DEFAULT_PRICE_API)]
    pub price_api: String,

    /// Blockchain the price API is queried on
    #[arg(long, global = true, env = "ARENA_CHAIN", default_value = DEFAULT_CHAIN)]
    pub chain: String,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Chat with the tavern keeper in the terminal (default)
    Chat,
    /// Serve the chat endpoint over HTTP
    Serve {
        #[arg(long, env = "ARENA_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "ARENA_PORT", default_value_t = 8000)]
        port: u16,
    },
    /// Simulate a battle locally without the agent
    Battle {
        /// Price of NFT 1 in USD
        nft1_price: f64,
        /// Price of NFT 2 in USD
        nft2_price: f64,
        /// Print the structured event record as JSON instead of the narrated log
        #[arg(long)]
        json: bool,
    },
    /// Estimate fighting power for a price
    Estimate {
        /// Price of the NFT in USD
        nft_price: f64,
    },
    /// Look up the current price of an NFT
    Price {
        /// Contract address or token id
        nft_id: String,
    },
}
