use super::state::Character;
use crate::items::ItemAttributes;

/// `attributes.total() * tier level + sum of equipped item combat power`.
///
/// Learned abilities do not contribute.
pub fn total_combat_power(character: &Character) -> u64 {
    let base = character
        .attributes
        .total()
        .saturating_mul(character.tier().level() as u64);
    base.saturating_add(character.equipment().combat_power())
}

/// Stat bonuses from every worn item added together.
pub fn equipped_attributes(character: &Character) -> ItemAttributes {
    character
        .equipment()
        .iter_equipped()
        .fold(ItemAttributes::default(), |acc, item| acc + item.attributes)
}

impl Character {
    pub fn total_combat_power(&self) -> u64 {
        total_combat_power(self)
    }
}
