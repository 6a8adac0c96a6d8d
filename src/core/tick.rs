//! The per-check orchestration function.
//!
//! `game_tick()` advances training, attempts a breakthrough and rolls one
//! random event. It returns a [`TickResult`] describing what happened so the
//! host can notify the player without the core knowing how.

use crate::character::tiers::Tier;
use crate::character::Character;
use crate::core::events::{roll_random_event, NarrativeEvent, RandomEvent};
use crate::items::Quality;
use rand::Rng;
use tracing::info;

/// A single event produced by a game tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    PowerGained { amount: u64, total: u64 },
    LeveledUp { levels: u32, new_level: u32 },
    BreakthroughAchieved {
        from: Tier,
        to: Tier,
        ability_name: String,
        currency: u64,
    },
    RareItemFound { item_name: String, quality: Quality },
    NarrativeEvent { event: NarrativeEvent, message: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
}

impl TickResult {
    pub fn breakthrough(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TickEvent::BreakthroughAchieved { .. }))
    }
}

/// Runs one periodic check covering `elapsed_seconds` of training.
pub fn game_tick(
    character: &mut Character,
    elapsed_seconds: u64,
    rng: &mut impl Rng,
) -> TickResult {
    let mut result = TickResult::default();

    // Training
    let report = character.advance(elapsed_seconds);
    if report.power_gained > 0 {
        result.events.push(TickEvent::PowerGained {
            amount: report.power_gained,
            total: character.accumulated_power(),
        });
    }
    if report.levels_gained > 0 {
        result.events.push(TickEvent::LeveledUp {
            levels: report.levels_gained,
            new_level: character.level,
        });
    }

    // Breakthrough
    if character.is_breakthrough_eligible() {
        if let Some(outcome) = character.perform_breakthrough(rng) {
            result.events.push(TickEvent::BreakthroughAchieved {
                from: outcome.from,
                to: outcome.to,
                ability_name: outcome.ability_name,
                currency: outcome.currency,
            });
        }
    }

    // Random encounter
    match roll_random_event(rng) {
        RandomEvent::RareItem(item) => {
            result.events.push(TickEvent::RareItemFound {
                item_name: item.name.clone(),
                quality: item.quality,
            });
            character.add_item(item);
        }
        RandomEvent::Narrative(event) => {
            info!(?event, "{}", event.message());
            result.events.push(TickEvent::NarrativeEvent {
                event,
                message: event.message().to_string(),
            });
        }
        RandomEvent::Nothing => {}
    }

    result
}
