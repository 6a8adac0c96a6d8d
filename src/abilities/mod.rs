//! Cultivation techniques: ability model, tier catalog and element combos.

pub mod catalog;
pub mod combo;
pub mod types;

pub use catalog::{basic_attack, tier_ability};
pub use combo::{check_combo, combo_id};
pub use types::*;
