//! Read-only snapshot of a character for display or JSON export.

use super::attributes::AttributeAxis;
use super::combat_power::{equipped_attributes, total_combat_power};
use super::progression::xp_for_next_level;
use super::state::Character;
use crate::abilities::check_combo;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterSummary {
    pub name: String,
    pub tier: String,
    pub tier_level: u32,
    pub accumulated_power: u64,
    /// Power needed for the next tier, absent at the final tier.
    pub next_threshold: Option<u64>,
    pub breakthrough_ready: bool,
    pub currency: u64,
    pub level: u32,
    pub experience: u64,
    pub experience_to_next: u64,
    pub attribute_points: u32,
    pub attributes: Vec<(String, u32)>,
    pub combat_power: u64,
    pub equipped_attack: u32,
    pub equipped_defense: u32,
    pub equipped: Vec<String>,
    pub inventory_count: usize,
    pub learned_abilities: usize,
    pub active_abilities: Vec<String>,
    pub combo: Option<String>,
    pub play_time_seconds: f64,
    pub training_seconds: u64,
}

impl Character {
    pub fn detailed_summary(&self) -> CharacterSummary {
        let bonus = equipped_attributes(self);
        CharacterSummary {
            name: self.name.clone(),
            tier: self.tier().name().to_string(),
            tier_level: self.tier().level(),
            accumulated_power: self.accumulated_power,
            next_threshold: self.tier().next().map(|t| t.threshold()),
            breakthrough_ready: self.is_breakthrough_eligible(),
            currency: self.currency,
            level: self.level,
            experience: self.experience,
            experience_to_next: xp_for_next_level(self.level),
            attribute_points: self.attribute_points,
            attributes: AttributeAxis::all()
                .iter()
                .map(|axis| (axis.name().to_string(), self.attributes.get(*axis)))
                .collect(),
            combat_power: total_combat_power(self),
            equipped_attack: bonus.attack,
            equipped_defense: bonus.defense,
            equipped: self
                .equipment()
                .iter_equipped()
                .map(|item| item.name.clone())
                .collect(),
            inventory_count: self.inventory.len(),
            learned_abilities: self.learned_abilities().len(),
            active_abilities: self.active_abilities().map(|a| a.name.clone()).collect(),
            combo: check_combo(self.active_abilities()).map(|combo| combo.name),
            play_time_seconds: self.play_time_seconds,
            training_seconds: self.training_seconds,
        }
    }
}

impl fmt::Display for CharacterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name:        {}", self.name)?;
        writeln!(f, "Realm:       {} ({})", self.tier, self.tier_level)?;
        match self.next_threshold {
            Some(threshold) => writeln!(
                f,
                "Cultivation: {} / {}{}",
                self.accumulated_power,
                threshold,
                if self.breakthrough_ready { " (ready)" } else { "" }
            )?,
            None => writeln!(f, "Cultivation: {} (peak)", self.accumulated_power)?,
        }
        writeln!(f, "Stones:      {}", self.currency)?;
        writeln!(
            f,
            "Level:       {} ({} / {} xp)",
            self.level, self.experience, self.experience_to_next
        )?;
        writeln!(f, "Points:      {}", self.attribute_points)?;
        for (name, value) in &self.attributes {
            writeln!(f, "  {:<15}{}", name, value)?;
        }
        writeln!(f, "Combat:      {}", self.combat_power)?;
        if !self.equipped.is_empty() {
            writeln!(f, "Equipped:    {}", self.equipped.join(", "))?;
        }
        writeln!(f, "Inventory:   {} items", self.inventory_count)?;
        writeln!(
            f,
            "Abilities:   {} learned, active: {}",
            self.learned_abilities,
            self.active_abilities.join(", ")
        )?;
        if let Some(combo) = &self.combo {
            writeln!(f, "Combo:       {}", combo)?;
        }
        write!(f, "Training:    {}s", self.training_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::tiers::Tier;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_summary_of_fresh_character() {
        let c = Character::new("Lin", &mut ChaCha8Rng::seed_from_u64(5));
        let summary = c.detailed_summary();
        assert_eq!(summary.name, "Lin");
        assert_eq!(summary.tier, "Qi Refining");
        assert_eq!(summary.next_threshold, Some(1_000));
        assert!(!summary.breakthrough_ready);
        assert_eq!(summary.combat_power, 50);
        assert_eq!(summary.attributes.len(), 5);
        assert_eq!(summary.active_abilities, vec!["Basic Attack".to_string()]);
        assert!(summary.combo.is_none());
    }

    #[test]
    fn test_summary_at_peak_has_no_threshold() {
        let mut c = Character::new("Lin", &mut ChaCha8Rng::seed_from_u64(5));
        c.tier = Tier::Tribulation;
        let summary = c.detailed_summary();
        assert_eq!(summary.next_threshold, None);
        assert!(summary.to_string().contains("(peak)"));
    }

    #[test]
    fn test_display_lists_key_fields() {
        let c = Character::new("Lin", &mut ChaCha8Rng::seed_from_u64(5));
        let text = c.detailed_summary().to_string();
        assert!(text.contains("Lin"));
        assert!(text.contains("0 / 1000"));
        assert!(text.contains("Stones:      100"));
        assert!(text.contains("Basic Attack"));
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let c = Character::new("Lin", &mut ChaCha8Rng::seed_from_u64(5));
        let json = serde_json::to_value(c.detailed_summary()).unwrap();
        assert_eq!(json["currency"], 100);
        assert_eq!(json["tier_level"], 1);
    }
}
