//! Integration test: character lifecycle scenarios
//!
//! Fresh character, breakthrough at threshold, refused allocation, element
//! combos, consumable depletion, and the progression properties around them.

use cultivation::abilities::{check_combo, tier_ability, Element};
use cultivation::character::progression::xp_for_next_level;
use cultivation::items::{generate_armor, generate_pill, generate_weapon, ItemEffectKind};
use cultivation::{ActionError, AttributeAxis, Character, Quality, Tier};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

#[test]
fn test_fresh_character() {
    let mut rng = create_test_rng();
    let c = Character::new("Han Li", &mut rng);

    assert_eq!(c.tier(), Tier::QiRefining);
    assert_eq!(c.accumulated_power(), 0);
    assert_eq!(c.currency(), 100);
    assert_eq!(c.learned_abilities().len(), 1);
    assert_eq!(c.active_ability_ids().len(), 1);
    assert_eq!(c.learned_abilities()[0].name, "Basic Attack");
    assert_eq!(c.total_combat_power(), c.attributes().total());
}

#[test]
fn test_breakthrough_at_exact_threshold() {
    let mut rng = create_test_rng();
    let mut c = Character::new("Han Li", &mut rng);
    c.absorb_power(Tier::Foundation.threshold());
    assert!(c.is_breakthrough_eligible());

    let points = c.attribute_points();
    let currency = c.currency();
    let outcome = c.perform_breakthrough(&mut rng).expect("eligible");

    assert_eq!(c.tier(), Tier::Foundation);
    assert_eq!(outcome.to, Tier::Foundation);
    assert_eq!(c.attribute_points(), points + 5);
    assert_eq!(c.currency(), currency + 100 * Tier::Foundation.level() as u64);

    // 1000 is below the Golden Core threshold, so the guard holds
    assert!(!c.is_breakthrough_eligible());
    let before = c.clone();
    assert!(c.perform_breakthrough(&mut rng).is_none());
    assert_eq!(c, before);
}

#[test]
fn test_allocate_with_no_points_fails() {
    let mut rng = create_test_rng();
    let mut c = Character::new("Han Li", &mut rng);
    assert_eq!(c.attribute_points(), 0);
    let before = *c.attributes();

    for axis in AttributeAxis::all() {
        assert!(matches!(
            c.allocate(1, axis),
            Err(ActionError::InsufficientAttributePoints { .. })
        ));
    }
    assert_eq!(*c.attributes(), before);
}

#[test]
fn test_combo_from_active_abilities() {
    let mut rng = create_test_rng();
    let mut c = Character::new("Han Li", &mut rng);

    let mut first = tier_ability(Tier::GoldenCore, &mut rng);
    let mut second = tier_ability(Tier::GoldenCore, &mut rng);
    first.element = Element::Wood;
    second.element = Element::Wood;
    first.level = 3;
    second.level = 6;
    let (first_id, second_id) = (first.id, second.id);
    c.learn_ability(first);
    c.learn_ability(second);

    // Basic Attack alone never combines
    assert!(check_combo(c.active_abilities()).is_none());

    c.activate_ability(first_id).unwrap();
    assert!(check_combo(c.active_abilities()).is_none());

    c.activate_ability(second_id).unwrap();
    let combo = check_combo(c.active_abilities()).expect("wood combo");
    assert_eq!(combo.element, Element::Wood);
    assert_eq!(combo.level, 6);
    assert_eq!(
        c.detailed_summary().combo.as_deref(),
        Some("Wood Combo Strike")
    );
}

#[test]
fn test_single_pill_depletes() {
    let mut rng = create_test_rng();
    let mut c = Character::new("Han Li", &mut rng);
    let pill = generate_pill(ItemEffectKind::BreakthroughAid, Quality::Epic, &mut rng);
    let id = pill.id;
    c.add_item(pill);

    let effects = c.use_item(id).unwrap();
    assert_eq!(effects.len(), 1);
    assert_eq!(effects[0].kind, ItemEffectKind::BreakthroughAid);
    assert_eq!(c.inventory[0].stack, 0);

    assert_eq!(c.use_item(id), Err(ActionError::StackEmpty));
}

#[test]
fn test_power_and_tier_are_monotone() {
    let mut rng = create_test_rng();
    let mut c = Character::new("Han Li", &mut rng);
    let mut last_power = 0;
    let mut last_tier = c.tier();

    for step in 0..2_000u64 {
        c.advance(step % 7 * 50);
        if c.is_breakthrough_eligible() {
            c.perform_breakthrough(&mut rng);
        }
        if c.attribute_points() > 0 {
            c.allocate(c.attribute_points(), AttributeAxis::Comprehension)
                .unwrap();
        }
        assert!(c.accumulated_power() >= last_power);
        assert!(c.tier() >= last_tier);
        last_power = c.accumulated_power();
        last_tier = c.tier();
    }
    assert!(c.tier() > Tier::QiRefining);
}

#[test]
fn test_offline_catch_up_levels_until_in_range() {
    let mut rng = create_test_rng();
    let mut c = Character::new("Han Li", &mut rng);

    // 3 power per second for a day
    let report = c.advance(86_400);
    assert_eq!(report.power_gained, 259_200);
    assert!(report.levels_gained > 1);
    assert!(c.experience < xp_for_next_level(c.level));
    assert_eq!(c.attribute_points(), report.levels_gained * 2);
}

#[test]
fn test_equip_exclusivity_per_slot() {
    let mut rng = create_test_rng();
    let mut c = Character::new("Han Li", &mut rng);
    let weapons: Vec<_> = (0..3)
        .map(|_| generate_weapon(Quality::Rare, &mut rng))
        .collect();
    let armor = generate_armor(Quality::Common, &mut rng);
    let armor_id = armor.id;
    for weapon in &weapons {
        c.add_item(weapon.clone());
    }
    c.add_item(armor);

    let mut displaced = Vec::new();
    for weapon in &weapons {
        if let Some(old) = c.equip(weapon.id).unwrap() {
            displaced.push(old);
        }
    }
    c.equip(armor_id).unwrap();

    assert_eq!(displaced.len(), 2);
    assert_eq!(c.equipment().iter_equipped().count(), 2);
    assert_eq!(
        c.equipment().weapon.as_ref().map(|w| w.id),
        Some(weapons[2].id)
    );
    assert!(c.inventory.is_empty());

    let armor_power = c
        .equipment()
        .armor
        .as_ref()
        .map_or(0, |a| a.combat_power());
    let expected = c.attributes().total() + weapons[2].combat_power() + armor_power;
    assert_eq!(c.total_combat_power(), expected);
}
