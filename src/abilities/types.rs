use crate::character::tiers::Tier;
use crate::core::constants::{
    ABILITY_BASE_DAMAGE_GROWTH, ABILITY_COST_GROWTH, ABILITY_EFFECT_GROWTH,
    ABILITY_LEARN_COST_PER_LEVEL, ABILITY_LEARN_COST_PER_TIER, ABILITY_MULTIPLIER_GROWTH,
    ABILITY_UPGRADE_COST_PER_LEVEL, ABILITY_UPGRADE_COST_PER_TIER,
};
use crate::error::ActionError;
use crate::items::types::scale;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a learned ability. Learned abilities are unique by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityId(Uuid);

impl AbilityId {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self(uuid::Builder::from_random_bytes(rng.gen()).into_uuid())
    }

    /// A stable id that does not depend on any RNG. Used for synthesized combos.
    pub const fn fixed(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The five phases plus "none".
///
/// Declaration order (Metal, Wood, Water, Fire, Earth) is the fixed
/// iteration order used by combo detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
    None,
}

impl Element {
    /// The five real elements, in combo tie-break order.
    pub const PHASES: [Element; 5] = [
        Element::Metal,
        Element::Wood,
        Element::Water,
        Element::Fire,
        Element::Earth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Element::Metal => "Metal",
            Element::Wood => "Wood",
            Element::Water => "Water",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::None => "None",
        }
    }

    /// Counter cycle: metal > wood > earth > water > fire > metal.
    ///
    /// Advisory only. Damage resolution does not consult it.
    pub fn counters(&self, other: Element) -> bool {
        matches!(
            (self, other),
            (Element::Metal, Element::Wood)
                | (Element::Wood, Element::Earth)
                | (Element::Earth, Element::Water)
                | (Element::Water, Element::Fire)
                | (Element::Fire, Element::Metal)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityCategory {
    Attack,
    Defense,
    Healing,
    Buff,
    Debuff,
    Movement,
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Targeting {
    Single,
    Line,
    Area,
    SelfTarget,
    All,
}

/// Outcome of one damage roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRoll {
    pub amount: u64,
    pub critical: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageProfile {
    pub base_damage: u32,
    pub multiplier: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub element: Element,
}

impl Default for DamageProfile {
    fn default() -> Self {
        Self {
            base_damage: 0,
            multiplier: 1.0,
            crit_chance: 0.1,
            crit_multiplier: 2.0,
            element: Element::None,
        }
    }
}

impl DamageProfile {
    /// `floor((base + attack_power) * multiplier)`, times `crit_multiplier`
    /// when a uniform draw lands under `crit_chance`.
    pub fn resolve(&self, attack_power: u32, rng: &mut impl Rng) -> DamageRoll {
        let raw = (self.base_damage as f64 + attack_power as f64) * self.multiplier;
        let critical = rng.gen::<f64>() < self.crit_chance;
        let amount = if critical {
            raw * self.crit_multiplier
        } else {
            raw
        };
        DamageRoll {
            amount: amount.max(0.0) as u64,
            critical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityEffectKind {
    Heal,
    Shield,
    BuffAttack,
    BuffDefense,
    BuffSpeed,
    DebuffAttack,
    DebuffDefense,
    DebuffSpeed,
    Poison,
    Burn,
    Freeze,
    Stun,
    Teleport,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbilityEffect {
    pub kind: AbilityEffectKind,
    pub magnitude: u32,
    pub duration_seconds: f64,
    pub chance: f64,
}

impl AbilityEffect {
    /// An instant effect that always triggers.
    pub fn instant(kind: AbilityEffectKind, magnitude: u32) -> Self {
        Self {
            kind,
            magnitude,
            duration_seconds: 0.0,
            chance: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: AbilityId,
    pub name: String,
    pub description: String,
    pub category: AbilityCategory,
    pub element: Element,
    pub targeting: Targeting,
    pub level: u32,
    pub max_level: u32,
    pub resource_cost: u32,
    pub cooldown_seconds: f64,
    pub cast_time_seconds: f64,
    pub damage: Option<DamageProfile>,
    pub effects: Vec<AbilityEffect>,
    pub unlock_tier: Tier,
}

impl Ability {
    pub fn is_max_level(&self) -> bool {
        self.level >= self.max_level
    }

    /// Raises the ability one level.
    ///
    /// Cost grows by 1.1, base damage by 1.2, damage multiplier by 1.05 and
    /// every effect magnitude by 1.15. Integer values truncate.
    pub fn level_up(&mut self) -> Result<(), ActionError> {
        if self.is_max_level() {
            return Err(ActionError::AbilityAtMaxLevel(self.max_level));
        }

        self.level += 1;
        self.resource_cost = scale(self.resource_cost, ABILITY_COST_GROWTH);

        if let Some(damage) = self.damage.as_mut() {
            damage.base_damage = scale(damage.base_damage, ABILITY_BASE_DAMAGE_GROWTH);
            damage.multiplier *= ABILITY_MULTIPLIER_GROWTH;
        }

        for effect in &mut self.effects {
            effect.magnitude = scale(effect.magnitude, ABILITY_EFFECT_GROWTH);
        }

        Ok(())
    }

    /// Spirit stones needed to learn this ability from a manual.
    pub fn learn_cost(&self) -> u64 {
        self.level as u64 * ABILITY_LEARN_COST_PER_LEVEL
            + self.unlock_tier.level() as u64 * ABILITY_LEARN_COST_PER_TIER
    }

    /// Spirit stones needed for the next level.
    pub fn upgrade_cost(&self) -> u64 {
        self.level as u64 * ABILITY_UPGRADE_COST_PER_LEVEL
            + self.unlock_tier.level() as u64 * ABILITY_UPGRADE_COST_PER_TIER
    }
}
