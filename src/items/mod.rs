//! Item system: types, equipment, name pools and generation.

pub mod equipment;
pub mod generation;
pub mod names;
pub mod types;

pub use equipment::*;
pub use generation::*;
pub use types::*;
