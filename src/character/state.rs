//! The cultivator: owned state plus inventory, equipment and ability bookkeeping.
//!
//! Progression (power, levels, breakthroughs) lives in `progression.rs`.

use super::attributes::Attributes;
use super::tiers::Tier;
use crate::abilities::{basic_attack, Ability, AbilityId};
use crate::core::constants::{MAX_ACTIVE_ABILITIES, STARTING_CURRENCY};
use crate::error::ActionError;
use crate::items::{EquipSlot, Equipment, Item, ItemEffect, ItemId};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub(super) tier: Tier,
    /// Total cultivation power. Never decreases outside of [`Character::reset`].
    pub(super) accumulated_power: u64,
    /// Spirit stones.
    pub(super) currency: u64,
    pub experience: u64,
    pub level: u32,
    pub(super) attributes: Attributes,
    /// Unspent attribute points.
    pub(super) attribute_points: u32,
    pub inventory: Vec<Item>,
    pub(super) equipment: Equipment,
    pub(super) learned_abilities: Vec<Ability>,
    /// Ids into `learned_abilities`, at most [`MAX_ACTIVE_ABILITIES`].
    pub(super) active_abilities: Vec<AbilityId>,
    pub play_time_seconds: f64,
    pub training_seconds: u64,
}

impl Character {
    /// A fresh Qi Refining cultivator with 100 spirit stones and Basic Attack
    /// learned and active.
    pub fn new(name: impl Into<String>, rng: &mut impl Rng) -> Self {
        let basic = basic_attack(rng);
        let basic_id = basic.id;
        Self {
            name: name.into(),
            tier: Tier::QiRefining,
            accumulated_power: 0,
            currency: STARTING_CURRENCY,
            experience: 0,
            level: 1,
            attributes: Attributes::new(),
            attribute_points: 0,
            inventory: Vec::new(),
            equipment: Equipment::new(),
            learned_abilities: vec![basic],
            active_abilities: vec![basic_id],
            play_time_seconds: 0.0,
            training_seconds: 0,
        }
    }

    /// Start over under the same name.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        let name = std::mem::take(&mut self.name);
        *self = Self::new(name, rng);
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn accumulated_power(&self) -> u64 {
        self.accumulated_power
    }

    pub fn currency(&self) -> u64 {
        self.currency
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute_points(&self) -> u32 {
        self.attribute_points
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn learned_abilities(&self) -> &[Ability] {
        &self.learned_abilities
    }

    pub fn active_ability_ids(&self) -> &[AbilityId] {
        &self.active_abilities
    }

    /// Active abilities in activation order.
    pub fn active_abilities(&self) -> impl Iterator<Item = &Ability> {
        self.active_abilities
            .iter()
            .filter_map(|id| self.find_ability(*id))
    }

    pub fn find_ability(&self, id: AbilityId) -> Option<&Ability> {
        self.learned_abilities.iter().find(|a| a.id == id)
    }

    /// Checks the invariants the API upholds, for state that arrived from outside.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.level == 0 {
            return Err("level must be at least 1");
        }

        let mut learned = HashSet::new();
        for ability in &self.learned_abilities {
            if !learned.insert(ability.id) {
                return Err("ability learned twice");
            }
            if ability.level == 0 || ability.level > ability.max_level {
                return Err("ability level out of range");
            }
        }

        if self.active_abilities.len() > MAX_ACTIVE_ABILITIES {
            return Err("too many active abilities");
        }
        let mut active = HashSet::new();
        for id in &self.active_abilities {
            if !learned.contains(id) {
                return Err("active ability was never learned");
            }
            if !active.insert(*id) {
                return Err("ability active twice");
            }
        }

        let mut items = self.inventory.iter().chain(self.equipment.iter_equipped());
        if items.any(|item| item.stack > item.max_stack) {
            return Err("item stack exceeds its maximum");
        }
        for slot in [EquipSlot::Weapon, EquipSlot::Armor, EquipSlot::Accessory] {
            if let Some(item) = self.equipment.get(slot) {
                if item.category.equip_slot() != Some(slot) {
                    return Err("item worn in the wrong slot");
                }
            }
        }
        Ok(())
    }

    pub fn record_play_time(&mut self, seconds: f64) {
        if seconds.is_finite() && seconds > 0.0 {
            self.play_time_seconds += seconds;
        }
    }

    // =========================================================================
    // Currency
    // =========================================================================

    pub fn earn_currency(&mut self, amount: u64) {
        self.currency = self.currency.saturating_add(amount);
    }

    /// Deducts `amount`, or leaves the balance untouched when it is short.
    pub fn spend_currency(&mut self, amount: u64) -> Result<(), ActionError> {
        if amount > self.currency {
            debug!(needed = amount, available = self.currency, "spend refused");
            return Err(ActionError::InsufficientCurrency {
                needed: amount,
                available: self.currency,
            });
        }
        self.currency -= amount;
        Ok(())
    }

    // =========================================================================
    // Inventory & equipment
    // =========================================================================

    pub fn add_item(&mut self, item: Item) {
        info!(item = %item.name, quality = item.quality.name(), "item obtained");
        self.inventory.push(item);
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.inventory.iter().position(|item| item.id == id)?;
        Some(self.inventory.swap_remove(index))
    }

    /// Moves an inventory item into its equipment slot.
    ///
    /// Returns whatever previously occupied the slot. The displaced item is
    /// handed to the caller and does not go back into the inventory.
    pub fn equip(&mut self, id: ItemId) -> Result<Option<Item>, ActionError> {
        let item = self
            .inventory
            .iter()
            .find(|item| item.id == id)
            .ok_or(ActionError::ItemNotFound(id))?;
        let slot = item
            .category
            .equip_slot()
            .ok_or(ActionError::NotEquippable(item.category))?;

        let item = self
            .remove_item(id)
            .ok_or(ActionError::ItemNotFound(id))?;
        info!(item = %item.name, ?slot, "equipped");
        Ok(self.equipment.replace(slot, item))
    }

    /// Consumes one unit of a pill or scroll and returns its effects.
    ///
    /// An emptied stack stays in the inventory with a stack of zero.
    pub fn use_item(&mut self, id: ItemId) -> Result<Vec<ItemEffect>, ActionError> {
        let item = self
            .inventory
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ActionError::ItemNotFound(id))?;
        let effects = item.consume()?;
        for effect in &effects {
            info!(
                item = %item.name,
                effect = effect.kind.name(),
                magnitude = effect.magnitude,
                duration = effect.duration_seconds,
                "effect applied"
            );
        }
        Ok(effects)
    }

    /// Upgrades an item wherever it is held, inventory first.
    pub fn upgrade_item(&mut self, id: ItemId) -> Result<(), ActionError> {
        let item = match self.inventory.iter_mut().find(|item| item.id == id) {
            Some(item) => item,
            None => self
                .equipment
                .find_mut(id)
                .ok_or(ActionError::ItemNotFound(id))?,
        };
        item.upgrade()
    }

    // =========================================================================
    // Abilities
    // =========================================================================

    /// Returns false when an ability with the same id is already known.
    pub fn learn_ability(&mut self, ability: Ability) -> bool {
        if self.find_ability(ability.id).is_some() {
            return false;
        }
        info!(ability = %ability.name, "ability learned");
        self.learned_abilities.push(ability);
        true
    }

    pub fn activate_ability(&mut self, id: AbilityId) -> Result<(), ActionError> {
        if self.find_ability(id).is_none() {
            return Err(ActionError::AbilityNotLearned(id));
        }
        if self.active_abilities.contains(&id) {
            return Err(ActionError::AbilityAlreadyActive(id));
        }
        if self.active_abilities.len() >= MAX_ACTIVE_ABILITIES {
            return Err(ActionError::ActiveAbilitiesFull(MAX_ACTIVE_ABILITIES));
        }
        self.active_abilities.push(id);
        Ok(())
    }

    pub fn deactivate_ability(&mut self, id: AbilityId) -> Result<(), ActionError> {
        let index = self
            .active_abilities
            .iter()
            .position(|active| *active == id)
            .ok_or(ActionError::AbilityNotActive(id))?;
        self.active_abilities.remove(index);
        Ok(())
    }

    /// Pays the upgrade cost and raises the ability one level.
    pub fn train_ability(&mut self, id: AbilityId) -> Result<(), ActionError> {
        let ability = self
            .find_ability(id)
            .ok_or(ActionError::AbilityNotLearned(id))?;
        if ability.is_max_level() {
            return Err(ActionError::AbilityAtMaxLevel(ability.max_level));
        }
        let cost = ability.upgrade_cost();
        self.spend_currency(cost)?;

        let ability = self
            .learned_abilities
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ActionError::AbilityNotLearned(id))?;
        ability.level_up()?;
        info!(ability = %ability.name, level = ability.level, cost, "ability trained");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::{tier_ability, Element};
    use crate::items::{generate_armor, generate_pill, generate_weapon, ItemEffectKind, Quality};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn create_test_character(rng: &mut ChaCha8Rng) -> Character {
        Character::new("Test Daoist", rng)
    }

    #[test]
    fn test_new_character_defaults() {
        let mut rng = create_test_rng();
        let c = create_test_character(&mut rng);
        assert_eq!(c.tier(), Tier::QiRefining);
        assert_eq!(c.accumulated_power, 0);
        assert_eq!(c.currency, 100);
        assert_eq!(c.level, 1);
        assert_eq!(c.learned_abilities().len(), 1);
        assert_eq!(c.active_ability_ids().len(), 1);
        assert_eq!(c.learned_abilities()[0].name, "Basic Attack");
        assert_eq!(c.active_ability_ids()[0], c.learned_abilities()[0].id);
    }

    #[test]
    fn test_same_seed_same_character() {
        let a = Character::new("Twin", &mut create_test_rng());
        let b = Character::new("Twin", &mut create_test_rng());
        assert_eq!(a, b);
        assert_ne!(a, Character::new("Twin", &mut ChaCha8Rng::seed_from_u64(43)));
    }

    #[test]
    fn test_new_character_is_valid() {
        let mut rng = create_test_rng();
        let mut c = create_test_character(&mut rng);
        assert_eq!(c.validate(), Ok(()));

        let weapon = generate_weapon(Quality::Rare, &mut rng);
        let weapon_id = weapon.id;
        c.add_item(weapon);
        c.equip(weapon_id).unwrap();
        c.learn_ability(tier_ability(Tier::Foundation, &mut rng));
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_wrong_slot() {
        let mut rng = create_test_rng();
        let mut c = create_test_character(&mut rng);
        c.equipment.accessory = Some(generate_armor(Quality::Common, &mut rng));
        assert_eq!(c.validate(), Err("item worn in the wrong slot"));
    }

    #[test]
    fn test_spend_currency_fails_closed() {
        let mut rng = create_test_rng();
        let mut c = create_test_character(&mut rng);
        assert_eq!(
            c.spend_currency(101),
            Err(ActionError::InsufficientCurrency {
                needed: 101,
                available: 100
            })
        );
        assert_eq!(c.currency, 100);
        c.spend_currency(100).unwrap();
        assert_eq!(c.currency, 0);
        c.earn_currency(u64::MAX);
        assert_eq!(c.currency, u64::MAX);
        c.earn_currency(5);
        assert_eq!(c.currency, u64::MAX);
    }

    #[test]
    fn test_equip_moves_item_and_returns_displaced() {
        let mut rng = create_test_rng();
        let mut c = create_test_character(&mut rng);
        let first = generate_weapon(Quality::Common, &mut rng);
        let second = generate_weapon(Quality::Rare, &mut rng);
        let (first_id, second_id) = (first.id, second.id);
        c.add_item(first.clone());
        c.add_item(second);

        assert_eq!(c.equip(first_id), Ok(None));
        assert_eq!(c.inventory.len(), 1);

        let displaced = c.equip(second_id).unwrap();
        assert_eq!(displaced, Some(first));
        assert!(c.inventory.is_empty());
        assert_eq!(c.equipment().iter_equipped().count(), 1);
        assert_eq!(
            c.equipment().weapon.as_ref().map(|item| item.id),
            Some(second_id)
        );
    }

    #[test]
    fn test_equip_rejects_missing_and_unequippable() {
        let mut rng = create_test_rng();
        let mut c = create_test_character(&mut rng);
        let stranger = generate_armor(Quality::Common, &mut rng);
        assert_eq!(
            c.equip(stranger.id),
            Err(ActionError::ItemNotFound(stranger.id))
        );

        let pill = generate_pill(ItemEffectKind::HealHp, Quality::Common, &mut rng);
        let pill_id = pill.id;
        c.add_item(pill);
        assert!(matches!(
            c.equip(pill_id),
            Err(ActionError::NotEquippable(_))
        ));
        assert_eq!(c.inventory.len(), 1);
    }

    #[test]
    fn test_use_item_depletes_stack_in_place() {
        let mut rng = create_test_rng();
        let mut c = create_test_character(&mut rng);
        let pill = generate_pill(ItemEffectKind::RestoreMana, Quality::Uncommon, &mut rng);
        let id = pill.id;
        let expected = pill.effects.clone();
        c.add_item(pill);

        assert_eq!(c.use_item(id), Ok(expected));
        assert_eq!(c.inventory[0].stack, 0);
        assert_eq!(c.use_item(id), Err(ActionError::StackEmpty));
    }

    #[test]
    fn test_upgrade_item_reaches_equipped_items() {
        let mut rng = create_test_rng();
        let mut c = create_test_character(&mut rng);
        let armor = generate_armor(Quality::Rare, &mut rng);
        let id = armor.id;
        let level = armor.level;
        c.add_item(armor);
        c.equip(id).unwrap();

        c.upgrade_item(id).unwrap();
        assert_eq!(c.equipment().armor.as_ref().map(|a| a.level), Some(level + 1));
    }

    #[test]
    fn test_learn_ability_rejects_duplicates() {
        let mut rng = create_test_rng();
        let mut c = create_test_character(&mut rng);
        let ability = tier_ability(Tier::GoldenCore, &mut rng);
        assert!(c.learn_ability(ability.clone()));
        assert!(!c.learn_ability(ability));
        assert_eq!(c.learned_abilities().len(), 2);
    }

    #[test]
    fn test_activation_guards() {
        let mut rng = create_test_rng();
        let mut c = create_test_character(&mut rng);
        let basic = c.active_ability_ids()[0];
        let outsider = tier_ability(Tier::Mahayana, &mut rng);
        assert_eq!(
            c.activate_ability(outsider.id),
            Err(ActionError::AbilityNotLearned(outsider.id))
        );
        assert_eq!(
            c.activate_ability(basic),
            Err(ActionError::AbilityAlreadyActive(basic))
        );

        let mut extra = Vec::new();
        for tier in [Tier::QiRefining, Tier::Foundation, Tier::GoldenCore, Tier::NascentSoul] {
            let ability = tier_ability(tier, &mut rng);
            extra.push(ability.id);
            c.learn_ability(ability);
        }
        for id in &extra[..3] {
            c.activate_ability(*id).unwrap();
        }
        assert_eq!(
            c.activate_ability(extra[3]),
            Err(ActionError::ActiveAbilitiesFull(4))
        );
        assert_eq!(c.active_ability_ids().len(), 4);

        c.deactivate_ability(basic).unwrap();
        assert_eq!(
            c.deactivate_ability(basic),
            Err(ActionError::AbilityNotActive(basic))
        );
        c.activate_ability(extra[3]).unwrap();
        assert!(c
            .active_abilities()
            .all(|a| c.find_ability(a.id).is_some()));
    }

    #[test]
    fn test_train_ability_spends_and_levels() {
        let mut rng = create_test_rng();
        let mut c = create_test_character(&mut rng);
        let basic = c.active_ability_ids()[0];
        c.earn_currency(10_000);
        let before = c.currency;
        // level 1, unlock tier level 1: 200 + 300
        c.train_ability(basic).unwrap();
        assert_eq!(c.currency, before - 500);
        assert_eq!(c.find_ability(basic).map(|a| a.level), Some(2));
    }

    #[test]
    fn test_train_ability_guards_do_not_mutate() {
        let mut rng = create_test_rng();
        let mut c = create_test_character(&mut rng);
        let basic = c.active_ability_ids()[0];
        assert!(matches!(
            c.train_ability(basic),
            Err(ActionError::InsufficientCurrency { .. })
        ));
        assert_eq!(c.currency, 100);
        assert_eq!(c.find_ability(basic).map(|a| a.level), Some(1));

        c.earn_currency(1_000_000);
        for _ in 0..4 {
            c.train_ability(basic).unwrap();
        }
        let currency = c.currency;
        assert_eq!(c.train_ability(basic), Err(ActionError::AbilityAtMaxLevel(5)));
        assert_eq!(c.currency, currency);
    }

    #[test]
    fn test_reset_keeps_name() {
        let mut rng = create_test_rng();
        let mut c = create_test_character(&mut rng);
        c.accumulated_power = 9_000;
        c.earn_currency(500);
        c.add_item(generate_weapon(Quality::Epic, &mut rng));
        c.reset(&mut rng);
        assert_eq!(c.name, "Test Daoist");
        assert_eq!(c.accumulated_power, 0);
        assert_eq!(c.currency, 100);
        assert!(c.inventory.is_empty());
        assert_eq!(c.learned_abilities()[0].element, Element::None);
    }

    #[test]
    fn test_record_play_time_ignores_bad_input() {
        let mut rng = create_test_rng();
        let mut c = create_test_character(&mut rng);
        c.record_play_time(1.5);
        c.record_play_time(-3.0);
        c.record_play_time(f64::NAN);
        assert_eq!(c.play_time_seconds, 1.5);
    }
}
