//! NFT arena combat: stat derivation, the turn engine, and log narration.

pub mod engine;
pub mod narrate;
pub mod stats;

pub use engine::{
    base_damage, fight, simulate, BattleEvent, BattleReport, EventKind, Side, Winner,
    DEFAULT_MAX_TURNS,
};
pub use narrate::render_log;
pub use stats::{estimate_fighting_power, validate_price, Combatant, FightingPower};
