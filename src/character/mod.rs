//! The cultivator: attributes, realms, progression, combat power and persistence.

pub mod attributes;
pub mod combat_power;
pub mod progression;
pub mod save;
pub mod state;
pub mod summary;
pub mod tiers;

pub use attributes::*;
pub use combat_power::{equipped_attributes, total_combat_power};
pub use progression::{xp_for_next_level, AdvanceReport, BreakthroughOutcome};
pub use save::SaveInfo;
pub use state::Character;
pub use summary::CharacterSummary;
pub use tiers::Tier;
