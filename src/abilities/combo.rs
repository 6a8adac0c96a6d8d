//! Element resonance: two or more active abilities of one element unlock a combo.

use super::types::{Ability, AbilityCategory, AbilityId, DamageProfile, Element, Targeting};
use crate::character::tiers::Tier;
use crate::core::constants::{
    ABILITY_DEFAULT_MAX_LEVEL, COMBO_BASE_DAMAGE, COMBO_COOLDOWN_SECONDS, COMBO_CRIT_CHANCE,
    COMBO_DAMAGE_MULTIPLIER, COMBO_DAMAGE_PER_LEVEL, COMBO_RESOURCE_COST,
};

const COMBO_ID_BASE: u128 = 0xC0B0_0000_0000_0000_0000_0000_0000_0000;

/// Stable id of the combo synthesized for `element`.
pub fn combo_id(element: Element) -> AbilityId {
    let offset = Element::PHASES
        .iter()
        .position(|e| *e == element)
        .unwrap_or(Element::PHASES.len()) as u128;
    AbilityId::fixed(COMBO_ID_BASE + offset)
}

/// Look for an element shared by at least two of `active`.
///
/// Elements are checked in Metal, Wood, Water, Fire, Earth order and the
/// first group found wins. Abilities without an element never combine.
pub fn check_combo<'a>(active: impl IntoIterator<Item = &'a Ability>) -> Option<Ability> {
    let active: Vec<&Ability> = active.into_iter().collect();

    Element::PHASES.iter().find_map(|element| {
        let group: Vec<&Ability> = active
            .iter()
            .copied()
            .filter(|a| a.element == *element)
            .collect();
        if group.len() < 2 {
            return None;
        }
        let level = group.iter().map(|a| a.level).max().unwrap_or(1);
        Some(build_combo(*element, level))
    })
}

fn build_combo(element: Element, level: u32) -> Ability {
    Ability {
        id: combo_id(element),
        name: format!("{} Combo Strike", element.name()),
        description: format!(
            "Abilities of the {} element resonate into a single strike.",
            element.name().to_lowercase()
        ),
        category: AbilityCategory::Attack,
        element,
        targeting: Targeting::Area,
        level,
        max_level: ABILITY_DEFAULT_MAX_LEVEL.max(level),
        resource_cost: COMBO_RESOURCE_COST,
        cooldown_seconds: COMBO_COOLDOWN_SECONDS,
        cast_time_seconds: 0.0,
        damage: Some(DamageProfile {
            base_damage: COMBO_BASE_DAMAGE + COMBO_DAMAGE_PER_LEVEL * level,
            multiplier: COMBO_DAMAGE_MULTIPLIER,
            crit_chance: COMBO_CRIT_CHANCE,
            crit_multiplier: 2.0,
            element,
        }),
        effects: vec![],
        unlock_tier: Tier::Foundation,
    }
}
