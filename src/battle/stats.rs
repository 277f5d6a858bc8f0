//! Stat derivation from an NFT's market price.
//!
//! Every stat is a base value plus a linear share of the price. The
//! [`FightingPower`] estimate is the exact formula; a [`Combatant`] adds a
//! small integer jitter to each stat so two fighters of equal price differ.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ArenaError;

const BASE_ATTACK: f64 = 50.0;
const BASE_DEFENSE: f64 = 40.0;
const BASE_SPEED: f64 = 30.0;
const BASE_HP: f64 = 450.0;

const ATTACK_SCALE: f64 = 0.5;
const DEFENSE_SCALE: f64 = 0.3;
const SPEED_SCALE: f64 = 0.2;
const HP_SCALE: f64 = 0.7;

const ATTACK_JITTER: i32 = 5;
const DEFENSE_JITTER: i32 = 3;
const SPEED_JITTER: i32 = 2;
const HP_JITTER: i32 = 20;

/// Deterministic fighting power derived from a price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FightingPower {
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub hp: f64,
}

/// Estimate fighting power for an NFT worth `nft_price` USD.
///
/// Fails with [`ArenaError::InvalidPrice`] for zero, negative or non-finite prices.
pub fn estimate_fighting_power(nft_price: f64) -> Result<FightingPower, ArenaError> {
    validate_price(nft_price)?;
    Ok(FightingPower {
        attack: round2(BASE_ATTACK + nft_price * ATTACK_SCALE),
        defense: round2(BASE_DEFENSE + nft_price * DEFENSE_SCALE),
        speed: round2(BASE_SPEED + nft_price * SPEED_SCALE),
        hp: round2(BASE_HP + nft_price * HP_SCALE),
    })
}

/// Reject prices the stat formulas are not meant for.
pub fn validate_price(nft_price: f64) -> Result<(), ArenaError> {
    if nft_price.is_finite() && nft_price > 0.0 {
        Ok(())
    } else {
        Err(ArenaError::InvalidPrice(nft_price))
    }
}

/// One side's stats for a single battle. Only `hp` changes once rolled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Combatant {
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub hp: f64,
}

impl Combatant {
    /// Roll a combatant for `nft_price`, drawing jitter for attack, defense,
    /// speed and hp in that order.
    pub fn roll(nft_price: f64, rng: &mut impl Rng) -> Self {
        let attack = BASE_ATTACK + nft_price * ATTACK_SCALE + jitter(ATTACK_JITTER, rng);
        let defense = BASE_DEFENSE + nft_price * DEFENSE_SCALE + jitter(DEFENSE_JITTER, rng);
        let speed = BASE_SPEED + nft_price * SPEED_SCALE + jitter(SPEED_JITTER, rng);
        let hp = BASE_HP + nft_price * HP_SCALE + jitter(HP_JITTER, rng);
        Self {
            attack: round2(attack),
            defense: round2(defense),
            speed: round2(speed),
            hp: round2(hp),
        }
    }

    pub fn is_down(&self) -> bool {
        self.hp <= 0.0
    }
}

fn jitter(spread: i32, rng: &mut impl Rng) -> f64 {
    f64::from(rng.gen_range(-spread..=spread))
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
