//! Tool for running an arena battle between two NFTs priced in USD.
//!
//! Rolls both fighters and plays the fight with the shared generator, then
//! returns the narrated log and the winner label ("NFT 1", "NFT 2" or "Draw").
//! Both prices must be positive.

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::SharedRng;
use crate::battle::{render_log, simulate, validate_price};
use crate::error::ArenaError;

/// Simulates a turn-based battle between two NFTs.
pub struct SimulateBattle {
    pub(crate) rng: SharedRng,
}

impl SimulateBattle {
    pub fn new(rng: SharedRng) -> Self {
        Self { rng }
    }
}

/// Arguments for [`SimulateBattle`].
#[derive(Debug, Deserialize)]
pub struct SimulateBattleArgs {
    /// Price of NFT 1 in USD.
    pub nft1_price: f64,
    /// Price of NFT 2 in USD.
    pub nft2_price: f64,
}

/// Narrated battle and its winner.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BattleOutcome {
    pub battle_log: String,
    pub winner: String,
}

impl Tool for SimulateBattle {
    const NAME: &'static str = "simulate_battle";
    type Error = ArenaError;
    type Args = SimulateBattleArgs;
    type Output = BattleOutcome;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: "simulate_battle".to_string(),
            description: "Simulate a turn-based arena battle between two NFTs. Stats are derived \
                from each NFT's USD price with a little randomness. Each turn one NFT attacks: \
                attacks can miss, be countered, crit for double damage, or be dodged by a faster \
                defender. Returns the narrated battle log and the winner."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "nft1_price": {
                        "type": "number",
                        "description": "The price of NFT 1 in USD"
                    },
                    "nft2_price": {
                        "type": "number",
                        "description": "The price of NFT 2 in USD"
                    }
                },
                "required": ["nft1_price", "nft2_price"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        validate_price(args.nft1_price)?;
        validate_price(args.nft2_price)?;

        let report = {
            let mut rng = self.rng.lock().await;
            simulate(args.nft1_price, args.nft2_price, &mut *rng)
        };
        debug!(
            nft1_price = args.nft1_price,
            nft2_price = args.nft2_price,
            turns = report.turns,
            winner = report.winner.label(),
            "Battle simulated"
        );

        Ok(BattleOutcome {
            battle_log: render_log(&report),
            winner: report.winner.label().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::shared_rng;

    fn args(nft1_price: f64, nft2_price: f64) -> SimulateBattleArgs {
        SimulateBattleArgs {
            nft1_price,
            nft2_price,
        }
    }

    #[test]
    fn test_parse_args() {
        let args: SimulateBattleArgs =
            serde_json::from_str(r#"{"nft1_price": 1.5, "nft2_price": 300}"#).unwrap();
        assert_eq!(args.nft1_price, 1.5);
        assert_eq!(args.nft2_price, 300.0);
    }

    #[tokio::test]
    async fn test_call_names_a_winner() {
        let tool = SimulateBattle::new(shared_rng(Some(1)));
        let outcome = tool.call(args(120.0, 80.0)).await.unwrap();
        assert!(outcome.winner == "NFT 1" || outcome.winner == "NFT 2");
        assert!(outcome.battle_log.starts_with("🏆 **NFT Battle Begins!**"));
        assert!(outcome
            .battle_log
            .ends_with(&format!("🏆 **{} wins the battle!**", outcome.winner)));
    }

    #[tokio::test]
    async fn test_same_seed_same_outcome() {
        let first = SimulateBattle::new(shared_rng(Some(42)))
            .call(args(55.0, 60.0))
            .await
            .unwrap();
        let second = SimulateBattle::new(shared_rng(Some(42)))
            .call(args(55.0, 60.0))
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_rng_advances_between_calls() {
        let tool = SimulateBattle::new(shared_rng(Some(9)));
        let first = tool.call(args(100.0, 100.0)).await.unwrap();
        let second = tool.call(args(100.0, 100.0)).await.unwrap();
        assert_ne!(first.battle_log, second.battle_log);
    }

    #[tokio::test]
    async fn test_call_rejects_non_positive_price() {
        let tool = SimulateBattle::new(shared_rng(Some(1)));
        let err = tool.call(args(10.0, -1.0)).await.unwrap_err();
        assert!(matches!(err, ArenaError::InvalidPrice(p) if p == -1.0));
    }
}
