use super::types::{EquipSlot, Item};
use serde::{Deserialize, Serialize};

/// Worn items, one optional item per slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub accessory: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> &Option<Item> {
        match slot {
            EquipSlot::Weapon => &self.weapon,
            EquipSlot::Armor => &self.armor,
            EquipSlot::Accessory => &self.accessory,
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<Item> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Accessory => &mut self.accessory,
        }
    }

    /// Puts `item` into `slot` and hands back whatever was there.
    pub fn replace(&mut self, slot: EquipSlot, item: Item) -> Option<Item> {
        self.slot_mut(slot).replace(item)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }

    pub fn find_mut(&mut self, id: super::ItemId) -> Option<&mut Item> {
        [&mut self.weapon, &mut self.armor, &mut self.accessory]
            .into_iter()
            .filter_map(|item| item.as_mut())
            .find(|item| item.id == id)
    }

    /// Sum of the combat power of every worn item.
    pub fn combat_power(&self) -> u64 {
        self.iter_equipped().map(Item::combat_power).sum()
    }
}
