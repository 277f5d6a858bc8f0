//! Tool for estimating an NFT's fighting power from its price.
//!
//! Pure formula, no randomness: the same price always yields the same stats.

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::battle::{estimate_fighting_power, FightingPower};
use crate::error::ArenaError;

/// Estimates attack, defense, speed and HP for an NFT price.
#[derive(Debug, Default)]
pub struct EstimateFightingPower;

impl EstimateFightingPower {
    pub fn new() -> Self {
        Self
    }
}

/// Arguments for [`EstimateFightingPower`].
#[derive(Debug, Deserialize)]
pub struct EstimateFightingPowerArgs {
    /// Market price of the NFT in USD.
    pub nft_price: f64,
}

impl Tool for EstimateFightingPower {
    const NAME: &'static str = "estimate_fighting_power";
    type Error = ArenaError;
    type Args = EstimateFightingPowerArgs;
    type Output = FightingPower;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: "estimate_fighting_power".to_string(),
            description: "Estimate the fighting power of an NFT from its market price in USD. \
                Attack = 50 + price*0.5, Defense = 40 + price*0.3, Speed = 30 + price*0.2, \
                HP = 450 + price*0.7. The price must be greater than zero."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "nft_price": {
                        "type": "number",
                        "description": "The price of the NFT in USD"
                    }
                },
                "required": ["nft_price"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        debug!(nft_price = args.nft_price, "Estimating fighting power");
        estimate_fighting_power(args.nft_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args: EstimateFightingPowerArgs =
            serde_json::from_str(r#"{"nft_price": 12.5}"#).unwrap();
        assert_eq!(args.nft_price, 12.5);
    }

    #[test]
    fn test_parse_args_missing_price() {
        assert!(serde_json::from_str::<EstimateFightingPowerArgs>("{}").is_err());
    }

    #[tokio::test]
    async fn test_call_returns_formula_stats() {
        let power = EstimateFightingPower::new()
            .call(EstimateFightingPowerArgs { nft_price: 100.0 })
            .await
            .unwrap();
        assert_eq!(
            power,
            FightingPower {
                attack: 100.0,
                defense: 70.0,
                speed: 50.0,
                hp: 520.0,
            }
        );
    }

    #[tokio::test]
    async fn test_call_rejects_zero_price() {
        let err = EstimateFightingPower::new()
            .call(EstimateFightingPowerArgs { nft_price: 0.0 })
            .await
            .unwrap_err();
        assert!(matches!(err, ArenaError::InvalidPrice(_)));
    }

    #[tokio::test]
    async fn test_output_serializes_lowercase_fields() {
        let power = EstimateFightingPower::new()
            .call(EstimateFightingPowerArgs { nft_price: 10.0 })
            .await
            .unwrap();
        let value = serde_json::to_value(power).unwrap();
        assert_eq!(value["attack"], 55.0);
        assert_eq!(value["hp"], 457.0);
    }
}
