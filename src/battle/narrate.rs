//! Text rendering of a [`BattleReport`] for the agent and the terminal.

use super::engine::{BattleReport, EventKind, Side, Winner};
use super::stats::Combatant;

/// Render the narrated battle log, one line per entry.
pub fn render_log(report: &BattleReport) -> String {
    let mut lines = vec![
        "🏆 **NFT Battle Begins!** 🏆".to_string(),
        format!("🔹 **NFT 1 Stats:** {}", stat_line(report.combatant(Side::A))),
        format!("🔸 **NFT 2 Stats:** {}", stat_line(report.combatant(Side::B))),
    ];

    let mut current_turn = 0;
    for event in &report.events {
        let closing = matches!(event.kind, EventKind::Defeat { .. } | EventKind::TurnLimit);
        if !closing && event.turn != current_turn {
            current_turn = event.turn;
            lines.push(format!(
                "\n🎭 **Turn {}:** {} attacks!",
                event.turn,
                Side::attacking_on(event.turn).label()
            ));
        }

        match event.kind {
            EventKind::Miss => {
                lines.push("💨 The attacker **misses the attack** completely!".to_string());
            }
            EventKind::Counter { damage } => lines.push(format!(
                "⚡ The defender **counters the attack**, striking back for **{damage:.2} damage!**"
            )),
            EventKind::Critical { .. } => {
                lines.push("💥 **CRITICAL HIT!** Damage is doubled!".to_string());
            }
            EventKind::Dodge => {
                lines.push("🌀 The defender **dodges the attack** effortlessly!".to_string());
            }
            EventKind::Hit { damage } => {
                lines.push(format!("🔥 The attack hits! **{damage:.2} damage dealt!**"));
            }
            EventKind::Defeat { fallen } => {
                lines.push(format!("\n💀 **{} has fallen!**", fallen.label()));
            }
            EventKind::TurnLimit => lines.push(format!(
                "\n⏳ **The arena bell rings after {} turns!** The healthier fighter takes it.",
                event.turn
            )),
        }
    }

    lines.push(match report.winner {
        Winner::Draw => "🤝 **The battle ends in a draw!**".to_string(),
        winner => format!("🏆 **{} wins the battle!**", winner.label()),
    });
    lines.join("\n")
}

fn stat_line(c: &Combatant) -> String {
    format!(
        "Attack {:.2}, Defense {:.2}, Speed {:.2}, HP {:.2}",
        c.attack, c.defense, c.speed, c.hp
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::engine::{fight, simulate, BattleEvent};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fighter(hp: f64) -> Combatant {
        Combatant {
            attack: 100.0,
            defense: 40.0,
            speed: 30.0,
            hp,
        }
    }

    #[test]
    fn renders_scripted_battle() {
        let report = BattleReport {
            starting: [fighter(100.0), fighter(50.0)],
            final_hp: [100.0, -10.0],
            events: vec![
                BattleEvent {
                    turn: 1,
                    actor: Side::A,
                    kind: EventKind::Critical { damage: 120.0 },
                },
                BattleEvent {
                    turn: 1,
                    actor: Side::A,
                    kind: EventKind::Hit { damage: 120.0 },
                },
                BattleEvent {
                    turn: 1,
                    actor: Side::A,
                    kind: EventKind::Defeat { fallen: Side::B },
                },
            ],
            turns: 1,
            winner: Winner::A,
        };

        let expected = "\
🏆 **NFT Battle Begins!** 🏆
🔹 **NFT 1 Stats:** Attack 100.00, Defense 40.00, Speed 30.00, HP 100.00
🔸 **NFT 2 Stats:** Attack 100.00, Defense 40.00, Speed 30.00, HP 50.00

🎭 **Turn 1:** NFT 1 attacks!
💥 **CRITICAL HIT!** Damage is doubled!
🔥 The attack hits! **120.00 damage dealt!**

💀 **NFT 2 has fallen!**
🏆 **NFT 1 wins the battle!**";
        assert_eq!(render_log(&report), expected);
    }

    #[test]
    fn one_turn_header_per_turn() {
        let report = simulate(100.0, 100.0, &mut ChaCha8Rng::seed_from_u64(8));
        let log = render_log(&report);
        assert_eq!(log.matches("🎭 **Turn").count() as u32, report.turns);
    }

    #[test]
    fn same_seed_renders_identical_log() {
        let first = render_log(&simulate(64.0, 32.0, &mut ChaCha8Rng::seed_from_u64(77)));
        let second = render_log(&simulate(64.0, 32.0, &mut ChaCha8Rng::seed_from_u64(77)));
        assert_eq!(first, second);
    }

    #[test]
    fn turn_limit_draw_is_narrated() {
        let wall = Combatant {
            attack: 1.0,
            defense: 500.0,
            speed: 10.0,
            hp: 1_000.0,
        };
        let log = render_log(&fight(wall, wall, 0, &mut ChaCha8Rng::seed_from_u64(1)));
        assert!(log.contains("arena bell rings after 0 turns"));
        assert!(log.ends_with("🤝 **The battle ends in a draw!**"));
    }
}
