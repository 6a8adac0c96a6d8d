use super::names::{
    display_name, pick_name, pill_name, ACCESSORY_NAMES, ARMOR_NAMES, TREASURE_NAMES,
    WEAPON_NAMES,
};
use super::types::{Item, ItemAttributes, ItemCategory, ItemEffect, ItemEffectKind, ItemId, Quality};
use crate::core::constants::{CONSUMABLE_MAX_STACK, PILL_EFFECT_DURATION_SECONDS};
use rand::Rng;

/// Generate an item of an equippable or treasure category at the given quality.
///
/// Returns `None` for consumables and quest items. Pills need an effect kind,
/// use [`generate_pill`] for those.
pub fn generate_item(
    category: ItemCategory,
    quality: Quality,
    rng: &mut impl Rng,
) -> Option<Item> {
    match category {
        ItemCategory::Weapon => Some(generate_weapon(quality, rng)),
        ItemCategory::Armor => Some(generate_armor(quality, rng)),
        ItemCategory::Accessory => Some(generate_accessory(quality, rng)),
        ItemCategory::Treasure => Some(generate_treasure(quality, rng)),
        ItemCategory::Pill | ItemCategory::Scroll | ItemCategory::Quest => None,
    }
}

/// Picks one of weapon, armor, accessory or treasure at Rare or Epic quality.
pub fn generate_rare_item(rng: &mut impl Rng) -> Item {
    let category = rng.gen_range(0..4);
    let quality = if rng.gen_bool(0.5) {
        Quality::Rare
    } else {
        Quality::Epic
    };
    match category {
        0 => generate_weapon(quality, rng),
        1 => generate_armor(quality, rng),
        2 => generate_accessory(quality, rng),
        _ => generate_treasure(quality, rng),
    }
}

fn mult(value: f64, quality: Quality) -> u32 {
    (value * quality.power_multiplier()) as u32
}

/// Rolled fields of a non-stacking item.
struct ItemSpec<'a> {
    category: ItemCategory,
    quality: Quality,
    base_name: &'a str,
    description: &'a str,
    level: u32,
    price: u64,
    attributes: ItemAttributes,
}

fn single_item(spec: ItemSpec<'_>, rng: &mut impl Rng) -> Item {
    Item {
        id: ItemId::random(rng),
        name: display_name(spec.quality, spec.base_name),
        description: spec.description.to_string(),
        category: spec.category,
        quality: spec.quality,
        level: spec.level,
        price: spec.price,
        attributes: spec.attributes,
        effects: vec![],
        max_stack: 1,
        stack: 1,
    }
}

pub fn generate_weapon(quality: Quality, rng: &mut impl Rng) -> Item {
    let base_name = pick_name(&WEAPON_NAMES, rng);
    let base_attack: u32 = rng.gen_range(10..=30);
    let level = rng.gen_range(1..=5);

    let attributes = ItemAttributes {
        attack: mult(base_attack as f64, quality),
        spiritual_power: mult((base_attack / 2) as f64, quality),
        ..ItemAttributes::default()
    };
    let price = mult((base_attack * 10) as f64, quality) as u64;

    single_item(
        ItemSpec {
            category: ItemCategory::Weapon,
            quality,
            base_name,
            description: "A keen cultivator's weapon humming with spiritual power.",
            level,
            price,
            attributes,
        },
        rng,
    )
}

pub fn generate_armor(quality: Quality, rng: &mut impl Rng) -> Item {
    let base_name = pick_name(&ARMOR_NAMES, rng);
    let base_defense: u32 = rng.gen_range(8..=25);
    let level = rng.gen_range(1..=5);

    let attributes = ItemAttributes {
        defense: mult(base_defense as f64, quality),
        health: mult((base_defense * 5) as f64, quality),
        ..ItemAttributes::default()
    };
    let price = mult((base_defense * 12) as f64, quality) as u64;

    single_item(
        ItemSpec {
            category: ItemCategory::Armor,
            quality,
            base_name,
            description: "Sturdy protective garb able to turn aside heavy blows.",
            level,
            price,
            attributes,
        },
        rng,
    )
}

pub fn generate_accessory(quality: Quality, rng: &mut impl Rng) -> Item {
    let base_name = pick_name(&ACCESSORY_NAMES, rng);
    let base_power: u32 = rng.gen_range(5..=15);
    let level = rng.gen_range(1..=5);

    let attributes = ItemAttributes {
        spiritual_power: mult(base_power as f64, quality),
        critical_rate: 0.05 * quality.power_multiplier(),
        ..ItemAttributes::default()
    };
    let price = mult((base_power * 15) as f64, quality) as u64;

    single_item(
        ItemSpec {
            category: ItemCategory::Accessory,
            quality,
            base_name,
            description: "A mysterious trinket holding a strange power.",
            level,
            price,
            attributes,
        },
        rng,
    )
}

/// Treasures are not equippable; they are valued and sold.
pub fn generate_treasure(quality: Quality, rng: &mut impl Rng) -> Item {
    let base_name = pick_name(&TREASURE_NAMES, rng);
    let base_power: u32 = rng.gen_range(100..=300);
    let level = rng.gen_range(5..=10);
    let m = quality.power_multiplier();

    let scaled = base_power as f64 * m;
    let attributes = ItemAttributes {
        attack: (scaled * 0.4) as u32,
        defense: (scaled * 0.3) as u32,
        spiritual_power: (scaled * 0.3) as u32,
        health: 0,
        critical_rate: 0.1 * m,
        dodge_rate: 0.05 * m,
    };
    let price = mult((base_power * 50) as f64, quality) as u64;

    single_item(
        ItemSpec {
            category: ItemCategory::Treasure,
            quality,
            base_name,
            description: "A legendary treasure of unfathomable power.",
            level,
            price,
            attributes,
        },
        rng,
    )
}

/// Default treasure quality when none is requested.
pub const DEFAULT_TREASURE_QUALITY: Quality = Quality::Legendary;

fn pill_magnitude(kind: ItemEffectKind, rng: &mut impl Rng) -> u32 {
    match kind {
        ItemEffectKind::HealHp => rng.gen_range(50..=150),
        ItemEffectKind::RestoreMana => rng.gen_range(30..=100),
        ItemEffectKind::IncreaseAttack => rng.gen_range(10..=30),
        ItemEffectKind::BreakthroughAid => rng.gen_range(100..=500),
        ItemEffectKind::IncreaseDefense | ItemEffectKind::IncreaseSpeed => 50,
    }
}

/// Generate a stackable pill carrying exactly one timed effect.
///
/// Magnitude scales with quality; duration does not.
pub fn generate_pill(kind: ItemEffectKind, quality: Quality, rng: &mut impl Rng) -> Item {
    let (base_name, description) = pill_name(kind);
    let value = pill_magnitude(kind, rng);

    Item {
        id: ItemId::random(rng),
        name: display_name(quality, base_name),
        description: description.to_string(),
        category: ItemCategory::Pill,
        quality,
        level: 1,
        price: mult((value * 5) as f64, quality) as u64,
        attributes: ItemAttributes::default(),
        effects: vec![ItemEffect {
            kind,
            magnitude: mult(value as f64, quality),
            duration_seconds: PILL_EFFECT_DURATION_SECONDS,
        }],
        max_stack: CONSUMABLE_MAX_STACK,
        stack: 1,
    }
}
