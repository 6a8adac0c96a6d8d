//! Cultivation over time: power gain, leveling, breakthroughs and attribute points.

use super::attributes::AttributeAxis;
use super::state::Character;
use super::tiers::Tier;
use crate::abilities::{tier_ability, AbilityId};
use crate::core::constants::{
    BASE_POWER_PER_SECOND, BREAKTHROUGH_ATTRIBUTE_POINTS, BREAKTHROUGH_CURRENCY_PER_TIER_LEVEL,
    COMPREHENSION_POWER_DIVISOR, LEVEL_UP_ATTRIBUTE_POINTS, XP_PER_LEVEL,
};
use crate::error::ActionError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Experience required to go from `level` to `level + 1`.
pub fn xp_for_next_level(level: u32) -> u64 {
    (level as u64).saturating_mul(XP_PER_LEVEL)
}

/// What one call to [`Character::advance`] produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    pub power_gained: u64,
    pub levels_gained: u32,
}

/// Rewards granted by a successful breakthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakthroughOutcome {
    pub from: Tier,
    pub to: Tier,
    pub attribute_points: u32,
    pub currency: u64,
    pub ability_name: String,
    pub ability_id: AbilityId,
}

impl Character {
    /// Power gained per second of training: `1 + comprehension / 10 + tier level`.
    pub fn power_per_second(&self) -> u64 {
        let comprehension = self.attributes.get(AttributeAxis::Comprehension);
        BASE_POWER_PER_SECOND
            + (comprehension / COMPREHENSION_POWER_DIVISOR) as u64
            + self.tier.level() as u64
    }

    /// Trains for `elapsed_seconds`, adding the same amount to power and experience.
    pub fn advance(&mut self, elapsed_seconds: u64) -> AdvanceReport {
        let gain = self.power_per_second().saturating_mul(elapsed_seconds);
        self.accumulated_power = self.accumulated_power.saturating_add(gain);
        self.training_seconds = self.training_seconds.saturating_add(elapsed_seconds);
        let levels_gained = self.gain_experience(gain);

        AdvanceReport {
            power_gained: gain,
            levels_gained,
        }
    }

    /// Adds power from outside of training, such as a breakthrough-aid pill.
    ///
    /// Experience and training time are left alone.
    pub fn absorb_power(&mut self, amount: u64) {
        self.accumulated_power = self.accumulated_power.saturating_add(amount);
        debug!(amount, power = self.accumulated_power, "power absorbed");
    }

    /// Adds experience and levels up as many times as it covers.
    ///
    /// Each level consumes `level * 100` experience and grants 2 attribute
    /// points. A large offline gain can cross several levels in one call.
    pub fn gain_experience(&mut self, amount: u64) -> u32 {
        self.experience = self.experience.saturating_add(amount);

        let mut levelups = 0;
        loop {
            let xp_needed = xp_for_next_level(self.level);
            if xp_needed == 0 || self.experience < xp_needed {
                break;
            }
            self.experience -= xp_needed;
            self.level = self.level.saturating_add(1);
            self.attribute_points = self
                .attribute_points
                .saturating_add(LEVEL_UP_ATTRIBUTE_POINTS);
            levelups += 1;
        }

        if levelups > 0 {
            info!(level = self.level, levelups, "level up");
        }
        levelups
    }

    pub fn is_breakthrough_eligible(&self) -> bool {
        match self.tier.next() {
            Some(next) => self.accumulated_power >= next.threshold(),
            None => false,
        }
    }

    /// Advances one tier when eligible. Returns `None` and changes nothing otherwise.
    pub fn perform_breakthrough(&mut self, rng: &mut impl Rng) -> Option<BreakthroughOutcome> {
        if !self.is_breakthrough_eligible() {
            debug!(tier = self.tier.name(), power = self.accumulated_power, "breakthrough not ready");
            return None;
        }
        let next = self.tier.next()?;
        let from = self.tier;

        self.tier = next;
        self.attribute_points = self
            .attribute_points
            .saturating_add(BREAKTHROUGH_ATTRIBUTE_POINTS);
        let currency = BREAKTHROUGH_CURRENCY_PER_TIER_LEVEL * next.level() as u64;
        self.earn_currency(currency);

        let ability = tier_ability(next, rng);
        let ability_name = ability.name.clone();
        let ability_id = ability.id;
        self.learn_ability(ability);

        info!(from = from.name(), to = next.name(), ability = %ability_name, "breakthrough");

        Some(BreakthroughOutcome {
            from,
            to: next,
            attribute_points: BREAKTHROUGH_ATTRIBUTE_POINTS,
            currency,
            ability_name,
            ability_id,
        })
    }

    /// Moves `points` unspent attribute points into `axis`.
    pub fn allocate(&mut self, points: u32, axis: AttributeAxis) -> Result<(), ActionError> {
        if points > self.attribute_points {
            debug!(points, available = self.attribute_points, "allocation refused");
            return Err(ActionError::InsufficientAttributePoints {
                requested: points,
                available: self.attribute_points,
            });
        }
        self.attribute_points -= points;
        self.attributes.add_to(axis, points);
        Ok(())
    }
}
