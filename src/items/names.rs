//! Fixed name pools for generated items.

use super::types::{ItemEffectKind, Quality};
use rand::seq::SliceRandom;
use rand::Rng;

pub const WEAPON_NAMES: [&str; 10] = [
    "Azure Edge Sword",
    "Blazing Saber",
    "Frost Spear",
    "Thunder Staff",
    "Dark Iron Hammer",
    "Jade Flute",
    "Purple-Gold Bell",
    "White Jade Fan",
    "Obsidian Shard",
    "Starfall Sword",
];

pub const ARMOR_NAMES: [&str; 10] = [
    "Golden Silk Robe",
    "Black Tortoise Plate",
    "Azure Dragon Robe",
    "White Tiger Vest",
    "Vermilion Feather Cloak",
    "Qilin Guard",
    "Phoenix Vestment",
    "Dragonscale Armor",
    "Crane Feather Robe",
    "Divine Beast Mail",
];

pub const ACCESSORY_NAMES: [&str; 10] = [
    "Spirit-Gathering Ring",
    "Heart-Guarding Mirror",
    "Warding Pearl",
    "Soul-Binding Bell",
    "Heaven-Reaching Bangle",
    "Cosmos Pouch",
    "Jade Pendant",
    "Dharma Seal",
    "Paper Talisman",
    "Spirit Charm",
];

pub const TREASURE_NAMES: [&str; 10] = [
    "Chaos Orb",
    "Sky-Splitting Axe",
    "Creation Jade Tablet",
    "Taiji Diagram",
    "River Chart",
    "Kunlun Mirror",
    "Eastern Emperor Bell",
    "Pangu Banner",
    "Immortal-Slaying Sword",
    "Investiture List",
];

pub fn pick_name(pool: &[&'static str], rng: &mut impl Rng) -> &'static str {
    pool.choose(rng).copied().unwrap_or("Nameless Relic")
}

pub fn pill_name(kind: ItemEffectKind) -> (&'static str, &'static str) {
    match kind {
        ItemEffectKind::HealHp => ("Blood Mending Pill", "A pill that restores health."),
        ItemEffectKind::RestoreMana => ("Qi Returning Pill", "A pill that restores mana."),
        ItemEffectKind::IncreaseAttack => (
            "Strength Pill",
            "A pill that temporarily raises attack.",
        ),
        ItemEffectKind::BreakthroughAid => (
            "Realm Breaking Pill",
            "A precious pill that aids a breakthrough.",
        ),
        ItemEffectKind::IncreaseDefense | ItemEffectKind::IncreaseSpeed => {
            ("Mysterious Pill", "A pill of unknown effect.")
        }
    }
}

/// "Rare Jade Pendant" and so on.
pub fn display_name(quality: Quality, base: &str) -> String {
    format!("{} {}", quality.name(), base)
}
