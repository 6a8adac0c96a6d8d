//! Balance constants, random events, tick orchestration and settings.

pub mod constants;
pub mod events;
pub mod settings;
pub mod tick;

pub use events::{roll_random_event, NarrativeEvent, RandomEvent};
pub use settings::{GameSettings, GraphicsQuality};
pub use tick::{game_tick, TickEvent, TickResult};
