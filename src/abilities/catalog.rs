//! Abilities granted at character creation and on reaching each tier.

use super::types::{
    Ability, AbilityCategory, AbilityEffect, AbilityEffectKind, AbilityId, DamageProfile, Element,
    Targeting,
};
use crate::character::tiers::Tier;
use crate::core::constants::ABILITY_DEFAULT_MAX_LEVEL;
use rand::Rng;

struct Template {
    name: &'static str,
    description: &'static str,
    category: AbilityCategory,
    element: Element,
    targeting: Targeting,
    resource_cost: u32,
    cooldown_seconds: f64,
    cast_time_seconds: f64,
    damage: Option<DamageProfile>,
    effects: Vec<AbilityEffect>,
}

impl Template {
    fn attack(name: &'static str, description: &'static str, element: Element) -> Self {
        Self {
            name,
            description,
            category: AbilityCategory::Attack,
            element,
            targeting: Targeting::Single,
            resource_cost: 0,
            cooldown_seconds: 0.0,
            cast_time_seconds: 0.0,
            damage: None,
            effects: vec![],
        }
    }

    fn into_ability(self, unlock_tier: Tier, max_level: u32, rng: &mut impl Rng) -> Ability {
        Ability {
            id: AbilityId::random(rng),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category,
            element: self.element,
            targeting: self.targeting,
            level: 1,
            max_level,
            resource_cost: self.resource_cost,
            cooldown_seconds: self.cooldown_seconds,
            cast_time_seconds: self.cast_time_seconds,
            damage: self.damage,
            effects: self.effects,
            unlock_tier,
        }
    }
}

fn damage(base_damage: u32, multiplier: f64, crit_chance: f64, element: Element) -> DamageProfile {
    DamageProfile {
        base_damage,
        multiplier,
        crit_chance,
        crit_multiplier: 2.0,
        element,
    }
}

fn timed(kind: AbilityEffectKind, magnitude: u32, duration_seconds: f64) -> AbilityEffect {
    AbilityEffect {
        kind,
        magnitude,
        duration_seconds,
        chance: 1.0,
    }
}

/// The plain strike every new character starts with.
pub fn basic_attack(rng: &mut impl Rng) -> Ability {
    Template {
        resource_cost: 0,
        cooldown_seconds: 1.0,
        damage: Some(damage(10, 1.0, 0.1, Element::None)),
        ..Template::attack(
            "Basic Attack",
            "A plain strike carried by raw spiritual power.",
            Element::None,
        )
    }
    .into_ability(Tier::QiRefining, 5, rng)
}

/// The ability learned on reaching `tier`.
///
/// Foundation picks one of two palms at random; every other tier is fixed.
pub fn tier_ability(tier: Tier, rng: &mut impl Rng) -> Ability {
    let template = match tier {
        Tier::QiRefining => Template {
            resource_cost: 10,
            cooldown_seconds: 2.0,
            damage: Some(damage(20, 1.2, 0.1, Element::None)),
            ..Template::attack(
                "Qi Blast",
                "Condensed qi hurled at a single foe.",
                Element::None,
            )
        },
        Tier::Foundation => {
            let element = if rng.gen_bool(0.5) {
                Element::Metal
            } else {
                Element::Fire
            };
            let (name, description) = match element {
                Element::Metal => ("Golden Palm", "A palm strike edged with metal qi."),
                _ => ("Flame Palm", "A palm strike wreathed in fire qi."),
            };
            Template {
                resource_cost: 25,
                cooldown_seconds: 3.0,
                damage: Some(damage(40, 1.5, 0.1, element)),
                ..Template::attack(name, description, element)
            }
        }
        Tier::GoldenCore => Template {
            targeting: Targeting::Area,
            resource_cost: 50,
            cooldown_seconds: 8.0,
            damage: Some(damage(80, 2.0, 0.2, Element::Metal)),
            ..Template::attack(
                "Golden Core Burst",
                "The golden core erupts, scattering metal qi in every direction.",
                Element::Metal,
            )
        },
        Tier::NascentSoul => Template {
            category: AbilityCategory::Buff,
            targeting: Targeting::SelfTarget,
            resource_cost: 80,
            cooldown_seconds: 30.0,
            effects: vec![
                timed(AbilityEffectKind::BuffAttack, 100, 10.0),
                timed(AbilityEffectKind::BuffSpeed, 50, 10.0),
            ],
            ..Template::attack(
                "Nascent Soul Projection",
                "The nascent soul steps out and empowers its host.",
                Element::None,
            )
        },
        Tier::SoulTransformation => Template {
            targeting: Targeting::Line,
            resource_cost: 120,
            cooldown_seconds: 6.0,
            damage: Some(damage(150, 2.5, 0.1, Element::None)),
            effects: vec![AbilityEffect {
                kind: AbilityEffectKind::Stun,
                magnitude: 1,
                duration_seconds: 2.0,
                chance: 0.3,
            }],
            ..Template::attack(
                "Divine Sense Strike",
                "A lance of divine sense that can stagger the mind.",
                Element::None,
            )
        },
        Tier::VoidMerging => Template {
            targeting: Targeting::Area,
            resource_cost: 200,
            cooldown_seconds: 15.0,
            damage: Some(damage(300, 3.0, 0.25, Element::None)),
            effects: vec![AbilityEffect::instant(AbilityEffectKind::Teleport, 1)],
            ..Template::attack(
                "Void Rift",
                "Tears open the void and steps through the wound.",
                Element::None,
            )
        },
        Tier::Mahayana => Template {
            targeting: Targeting::All,
            resource_cost: 300,
            cooldown_seconds: 20.0,
            cast_time_seconds: 3.0,
            damage: Some(damage(500, 4.0, 0.3, Element::None)),
            ..Template::attack(
                "Heavenly Tribulation",
                "Calls down the lightning of heaven upon every foe.",
                Element::None,
            )
        },
        Tier::Tribulation => Template {
            category: AbilityCategory::Special,
            targeting: Targeting::All,
            resource_cost: 500,
            cooldown_seconds: 60.0,
            cast_time_seconds: 5.0,
            damage: Some(DamageProfile {
                crit_multiplier: 3.0,
                ..damage(1000, 5.0, 0.5, Element::None)
            }),
            ..Template::attack(
                "Shatter the Void",
                "A single blow that breaks the sky itself.",
                Element::None,
            )
        },
    };

    template.into_ability(tier, ABILITY_DEFAULT_MAX_LEVEL, rng)
}
