//! Rig tools exposing the arena to the tavern-keeper agent.
//!
//! Each tool implements the [`rig::tool::Tool`] trait so it can be registered with
//! a Rig agent. Battle tools draw from a [`SharedRng`] so a seeded session replays
//! the same fights; the price tool delegates to [`crate::price::PriceFeed`].

mod battle;
mod estimate;
mod nft_price;

use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};
use tokio::sync::Mutex;

pub use battle::{BattleOutcome, SimulateBattle, SimulateBattleArgs};
pub use estimate::{EstimateFightingPower, EstimateFightingPowerArgs};
pub use nft_price::{GetNftPrice, GetNftPriceArgs, NftPrice};

/// Random source shared by every battle the agent runs.
/// `Tool::call()` takes `&self`, so the generator lives behind a mutex.
pub type SharedRng = Arc<Mutex<StdRng>>;

/// Seeded generator when `seed` is given, otherwise one seeded from OS entropy.
pub fn shared_rng(seed: Option<u64>) -> SharedRng {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Arc::new(Mutex::new(rng))
}
