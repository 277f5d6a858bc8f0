//! Turn-based arena combat between two rolled combatants.
//!
//! Side A attacks on odd turns and side B on even turns. Each turn draws an
//! event roll that can turn the attack into a miss or a counter-attack; a
//! regular attack may crit and, against a faster defender, may be dodged.
//! All randomness comes from the caller's [`Rng`], so a seeded generator
//! replays a battle exactly.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::stats::Combatant;

/// Turn cap applied by [`simulate`].
pub const DEFAULT_MAX_TURNS: u32 = 1000;

const MISS_BELOW: u32 = 10;
const COUNTER_ABOVE: u32 = 90;
const CRIT_SIDES: u32 = 10;
const DODGE_BELOW: u32 = 15;

/// One of the two fighters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// The side that attacks on `turn` (1-based).
    pub fn attacking_on(turn: u32) -> Self {
        if turn % 2 == 1 {
            Side::A
        } else {
            Side::B
        }
    }

    /// Display label used in narration and tool output.
    pub fn label(self) -> &'static str {
        match self {
            Side::A => "NFT 1",
            Side::B => "NFT 2",
        }
    }
}

/// Outcome of a battle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Winner {
    A,
    B,
    Draw,
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::A => Winner::A,
            Side::B => Winner::B,
        }
    }
}

impl Winner {
    pub fn label(self) -> &'static str {
        match self {
            Winner::A => Side::A.label(),
            Winner::B => Side::B.label(),
            Winner::Draw => "Draw",
        }
    }
}

/// What happened during a turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    /// The attacker slipped; nothing happens.
    Miss,
    /// The defender struck back for `damage` against the attacker.
    Counter { damage: f64 },
    /// The attack crit; `damage` is the already doubled amount.
    Critical { damage: f64 },
    /// The attack landed for `damage`.
    Hit { damage: f64 },
    /// The defender evaded the attack.
    Dodge,
    /// `fallen` reached zero hp.
    Defeat { fallen: Side },
    /// The turn cap was reached before anyone fell.
    TurnLimit,
}

/// A single entry of the battle record.
///
/// `actor` is the side acting in the event: the attacker for misses, hits,
/// crits and dodges, the defender for counters, and the victor for defeats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BattleEvent {
    pub turn: u32,
    pub actor: Side,
    #[serde(flatten)]
    pub kind: EventKind,
}

/// Full record of a simulated battle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BattleReport {
    /// Stats as rolled before the first turn.
    pub starting: [Combatant; 2],
    /// Remaining hp of A and B when the battle ended. May be negative.
    pub final_hp: [f64; 2],
    pub events: Vec<BattleEvent>,
    /// Number of turns started.
    pub turns: u32,
    pub winner: Winner,
}

impl BattleReport {
    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.starting[index(side)]
    }
}

/// Damage an attack deals before crits: never below one point.
pub fn base_damage(attacker: &Combatant, defender: &Combatant) -> f64 {
    (attacker.attack - defender.defense).max(1.0)
}

/// Roll both combatants from their prices and fight with [`DEFAULT_MAX_TURNS`].
///
/// Prices are not validated here; callers that take user input check them first.
pub fn simulate(price_a: f64, price_b: f64, rng: &mut impl Rng) -> BattleReport {
    let a = Combatant::roll(price_a, rng);
    let b = Combatant::roll(price_b, rng);
    fight(a, b, DEFAULT_MAX_TURNS, rng)
}

/// Fight two already rolled combatants.
///
/// When `max_turns` turns pass without a defeat the side with more hp left
/// wins; equal hp is a draw. Any `max_turns` up to `u32::MAX` is accepted.
pub fn fight(a: Combatant, b: Combatant, max_turns: u32, rng: &mut impl Rng) -> BattleReport {
    let starting = [a, b];
    let mut fighters = starting;
    let mut events = Vec::new();
    let mut turns = 0;

    let winner: Winner = 'battle: {
        for turn in 1..=max_turns {
            // A counter can drop the attacker without ending its turn.
            if let Some(victor) = survivor(&fighters) {
                events.push(defeat_of(victor.opponent(), turns));
                break 'battle victor.into();
            }
            turns = turn;

            let attacker_side = Side::attacking_on(turn);
            let defender_side = attacker_side.opponent();
            let attacker = fighters[index(attacker_side)];
            let defender = fighters[index(defender_side)];

            let event_roll = rng.gen_range(1..=100);
            if event_roll < MISS_BELOW {
                events.push(BattleEvent {
                    turn,
                    actor: attacker_side,
                    kind: EventKind::Miss,
                });
                continue;
            }
            if event_roll > COUNTER_ABOVE {
                let damage = base_damage(&defender, &attacker);
                fighters[index(attacker_side)].hp -= damage;
                events.push(BattleEvent {
                    turn,
                    actor: defender_side,
                    kind: EventKind::Counter { damage },
                });
                continue;
            }

            let mut damage = base_damage(&attacker, &defender);
            if rng.gen_range(1..=CRIT_SIDES) == 1 {
                damage *= 2.0;
                events.push(BattleEvent {
                    turn,
                    actor: attacker_side,
                    kind: EventKind::Critical { damage },
                });
            }

            let dodged = defender.speed > attacker.speed && rng.gen_range(1..=100) < DODGE_BELOW;
            if dodged {
                events.push(BattleEvent {
                    turn,
                    actor: attacker_side,
                    kind: EventKind::Dodge,
                });
            } else {
                fighters[index(defender_side)].hp -= damage;
                events.push(BattleEvent {
                    turn,
                    actor: attacker_side,
                    kind: EventKind::Hit { damage },
                });
            }

            if fighters[index(defender_side)].is_down() {
                events.push(defeat_of(defender_side, turn));
                break 'battle attacker_side.into();
            }
        }

        // A counter on the last allowed turn still decides the battle.
        if let Some(victor) = survivor(&fighters) {
            events.push(defeat_of(victor.opponent(), turns));
            break 'battle victor.into();
        }

        events.push(BattleEvent {
            turn: turns,
            actor: Side::attacking_on(turns),
            kind: EventKind::TurnLimit,
        });
        tie_break(&fighters)
    };

    BattleReport {
        starting,
        final_hp: [fighters[0].hp, fighters[1].hp],
        events,
        turns,
        winner,
    }
}

/// The side still standing when the other is down.
fn survivor(fighters: &[Combatant; 2]) -> Option<Side> {
    [Side::A, Side::B]
        .into_iter()
        .find(|&side| fighters[index(side)].is_down())
        .map(Side::opponent)
}

fn defeat_of(fallen: Side, turn: u32) -> BattleEvent {
    BattleEvent {
        turn,
        actor: fallen.opponent(),
        kind: EventKind::Defeat { fallen },
    }
}

fn tie_break(fighters: &[Combatant; 2]) -> Winner {
    let (a, b) = (fighters[0].hp, fighters[1].hp);
    if a > b {
        Winner::A
    } else if b > a {
        Winner::B
    } else {
        Winner::Draw
    }
}

fn index(side: Side) -> usize {
    match side {
        Side::A => 0,
        Side::B => 1,
    }
}
