//! Random encounters rolled once per periodic check.

use crate::core::constants::{NARRATIVE_EVENT_ROLL_MAX, RANDOM_EVENT_ROLL_MAX, RARE_ITEM_ROLL_MAX};
use crate::items::{generate_rare_item, Item};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Flavor encounters. They notify the player and change nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NarrativeEvent {
    HiddenCaveDwelling,
    SeniorCultivator,
    SpiritHerb,
    InnerDemon,
}

impl NarrativeEvent {
    pub fn all() -> [NarrativeEvent; 4] {
        [
            NarrativeEvent::HiddenCaveDwelling,
            NarrativeEvent::SeniorCultivator,
            NarrativeEvent::SpiritHerb,
            NarrativeEvent::InnerDemon,
        ]
    }

    pub fn message(&self) -> &'static str {
        match self {
            NarrativeEvent::HiddenCaveDwelling => "You stumble upon the hidden cave dwelling of an ancient master.",
            NarrativeEvent::SeniorCultivator => "A senior cultivator passes by and offers a word of guidance.",
            NarrativeEvent::SpiritHerb => "You spot a spirit herb growing on a distant cliff.",
            NarrativeEvent::InnerDemon => "An inner demon stirs, and you steady your heart against it.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RandomEvent {
    Nothing,
    RareItem(Item),
    Narrative(NarrativeEvent),
}

/// Rolls uniformly in `[1, 1000]`: 1..=5 finds a rare item, 6..=20 is a
/// narrative encounter, anything higher is quiet.
pub fn roll_random_event(rng: &mut impl Rng) -> RandomEvent {
    let roll = rng.gen_range(1..=RANDOM_EVENT_ROLL_MAX);
    event_for_roll(roll, rng)
}

/// Maps a roll to its event. Item and narrative choices still draw from `rng`.
pub fn event_for_roll(roll: u32, rng: &mut impl Rng) -> RandomEvent {
    if roll <= RARE_ITEM_ROLL_MAX {
        RandomEvent::RareItem(generate_rare_item(rng))
    } else if roll <= NARRATIVE_EVENT_ROLL_MAX {
        let events = NarrativeEvent::all();
        match events.choose(rng) {
            Some(event) => RandomEvent::Narrative(*event),
            None => RandomEvent::Nothing,
        }
    } else {
        RandomEvent::Nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Quality;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_roll_bands() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for roll in 1..=5 {
            assert!(matches!(event_for_roll(roll, &mut rng), RandomEvent::RareItem(_)));
        }
        for roll in 6..=20 {
            assert!(matches!(event_for_roll(roll, &mut rng), RandomEvent::Narrative(_)));
        }
        for roll in [21, 500, 1000] {
            assert_eq!(event_for_roll(roll, &mut rng), RandomEvent::Nothing);
        }
    }

    #[test]
    fn test_rare_item_quality() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        match event_for_roll(1, &mut rng) {
            RandomEvent::RareItem(item) => {
                assert!(matches!(item.quality, Quality::Rare | Quality::Epic))
            }
            other => panic!("expected rare item, got {:?}", other),
        }
    }

    #[test]
    fn test_event_frequencies() {
        let mut rng = ChaCha8Rng::seed_from_u64(2025);
        let trials = 200_000;
        let mut rare = 0;
        let mut narrative = 0;
        for _ in 0..trials {
            match roll_random_event(&mut rng) {
                RandomEvent::RareItem(_) => rare += 1,
                RandomEvent::Narrative(_) => narrative += 1,
                RandomEvent::Nothing => {}
            }
        }
        // expected 1000 rare and 3000 narrative
        assert!((800..1200).contains(&rare), "rare = {rare}");
        assert!((2700..3300).contains(&narrative), "narrative = {narrative}");
    }

    #[test]
    fn test_all_narrative_events_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            if let RandomEvent::Narrative(event) = event_for_roll(10, &mut rng) {
                seen.insert(event);
            }
        }
        assert_eq!(seen.len(), 4);
    }
}
