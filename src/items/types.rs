use crate::core::constants::{ITEM_LEVEL_POWER, ITEM_UPGRADE_FACTOR};
use crate::error::ActionError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use uuid::Uuid;

/// Identity of a single item instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Draws a random v4 id from `rng` so generation stays reproducible under a seed.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self(uuid::Builder::from_random_bytes(rng.gen()).into_uuid())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Generators fall back to Common when the caller has no preference.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Quality {
    #[default]
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythical = 5,
}

impl Quality {
    pub fn all() -> [Quality; 6] {
        [
            Quality::Common,
            Quality::Uncommon,
            Quality::Rare,
            Quality::Epic,
            Quality::Legendary,
            Quality::Mythical,
        ]
    }

    /// Returns the display name for this quality tier.
    pub fn name(&self) -> &'static str {
        match self {
            Quality::Common => "Common",
            Quality::Uncommon => "Uncommon",
            Quality::Rare => "Rare",
            Quality::Epic => "Epic",
            Quality::Legendary => "Legendary",
            Quality::Mythical => "Mythical",
        }
    }

    /// Scales rolled stats, prices and item combat power.
    pub fn power_multiplier(&self) -> f64 {
        match self {
            Quality::Common => 1.0,
            Quality::Uncommon => 1.2,
            Quality::Rare => 1.5,
            Quality::Epic => 2.0,
            Quality::Legendary => 3.0,
            Quality::Mythical => 5.0,
        }
    }
}

/// Equipment slot. At most one item is worn per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armor,
    Accessory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Accessory,
    Pill,
    Scroll,
    Treasure,
    Quest,
}

impl ItemCategory {
    pub fn equip_slot(&self) -> Option<EquipSlot> {
        match self {
            ItemCategory::Weapon => Some(EquipSlot::Weapon),
            ItemCategory::Armor => Some(EquipSlot::Armor),
            ItemCategory::Accessory => Some(EquipSlot::Accessory),
            _ => None,
        }
    }

    pub fn is_equippable(&self) -> bool {
        self.equip_slot().is_some()
    }

    pub fn is_consumable(&self) -> bool {
        matches!(self, ItemCategory::Pill | ItemCategory::Scroll)
    }
}

/// Flat stat bonuses carried by an item. Bundles combine with `+`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemAttributes {
    pub attack: u32,
    pub defense: u32,
    pub spiritual_power: u32,
    pub health: u32,
    pub critical_rate: f64,
    pub dodge_rate: f64,
}

impl ItemAttributes {
    /// The stats that feed item combat power.
    pub fn power_base(&self) -> u64 {
        self.attack as u64 + self.defense as u64 + self.spiritual_power as u64
    }
}

impl Add for ItemAttributes {
    type Output = ItemAttributes;

    fn add(self, rhs: ItemAttributes) -> ItemAttributes {
        ItemAttributes {
            attack: self.attack.saturating_add(rhs.attack),
            defense: self.defense.saturating_add(rhs.defense),
            spiritual_power: self.spiritual_power.saturating_add(rhs.spiritual_power),
            health: self.health.saturating_add(rhs.health),
            critical_rate: self.critical_rate + rhs.critical_rate,
            dodge_rate: self.dodge_rate + rhs.dodge_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemEffectKind {
    HealHp,
    RestoreMana,
    IncreaseAttack,
    IncreaseDefense,
    IncreaseSpeed,
    BreakthroughAid,
}

impl ItemEffectKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemEffectKind::HealHp => "Restore Health",
            ItemEffectKind::RestoreMana => "Restore Mana",
            ItemEffectKind::IncreaseAttack => "Increase Attack",
            ItemEffectKind::IncreaseDefense => "Increase Defense",
            ItemEffectKind::IncreaseSpeed => "Increase Speed",
            ItemEffectKind::BreakthroughAid => "Breakthrough Aid",
        }
    }
}

/// A timed effect applied when a consumable is used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemEffect {
    pub kind: ItemEffectKind,
    pub magnitude: u32,
    pub duration_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub quality: Quality,
    pub level: u32,
    pub price: u64,
    pub attributes: ItemAttributes,
    pub effects: Vec<ItemEffect>,
    pub max_stack: u32,
    pub stack: u32,
}

impl Item {
    /// `floor((attack + defense + spiritual_power) * quality) + level * 10`.
    ///
    /// Derived on demand, never stored.
    pub fn combat_power(&self) -> u64 {
        let scaled = (self.attributes.power_base() as f64 * self.quality.power_multiplier()) as u64;
        scaled.saturating_add(self.level as u64 * ITEM_LEVEL_POWER)
    }

    /// Uses one unit of a consumable and returns the effects to apply.
    pub fn consume(&mut self) -> Result<Vec<ItemEffect>, ActionError> {
        if !self.category.is_consumable() {
            return Err(ActionError::NotConsumable(self.category));
        }
        if self.stack == 0 {
            return Err(ActionError::StackEmpty);
        }

        self.stack -= 1;
        Ok(self.effects.clone())
    }

    /// Raises an equippable item one level, scaling its core stats by 1.1.
    pub fn upgrade(&mut self) -> Result<(), ActionError> {
        if !self.category.is_equippable() {
            return Err(ActionError::NotEquippable(self.category));
        }

        self.level = self.level.saturating_add(1);
        let attrs = &mut self.attributes;
        attrs.attack = scale(attrs.attack, ITEM_UPGRADE_FACTOR);
        attrs.defense = scale(attrs.defense, ITEM_UPGRADE_FACTOR);
        attrs.spiritual_power = scale(attrs.spiritual_power, ITEM_UPGRADE_FACTOR);
        attrs.health = scale(attrs.health, ITEM_UPGRADE_FACTOR);
        Ok(())
    }
}

/// Multiplies and truncates toward zero.
pub(crate) fn scale(value: u32, factor: f64) -> u32 {
    (value as f64 * factor) as u32
}
