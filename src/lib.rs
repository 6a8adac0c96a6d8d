//! Cultivation - progression and combat-power core of an idle xiuxian game.
//!
//! The host owns a [`Character`] and calls [`game_tick`] once per check
//! interval. Everything random draws from a caller-supplied `rand::Rng`.

pub mod abilities;
pub mod character;
pub mod core;
pub mod error;
pub mod items;

pub use abilities::{check_combo, Ability, AbilityId, Element};
pub use character::{save, total_combat_power, AttributeAxis, Character, CharacterSummary, Tier};
pub use core::{game_tick, roll_random_event, GameSettings, RandomEvent, TickEvent, TickResult};
pub use error::{ActionError, DecodeError};
pub use items::{Equipment, Item, ItemCategory, ItemId, Quality};
