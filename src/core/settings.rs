//! Player-facing settings.
//!
//! The core never reads these. They ride along so a host can persist them
//! next to the save, as JSON.

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphicsQuality {
    Low,
    #[default]
    Medium,
    High,
    Ultra,
}

impl GraphicsQuality {
    pub fn name(&self) -> &'static str {
        match self {
            GraphicsQuality::Low => "Low",
            GraphicsQuality::Medium => "Medium",
            GraphicsQuality::High => "High",
            GraphicsQuality::Ultra => "Ultra",
        }
    }
}

/// Missing fields fall back to their defaults when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Music volume (0.0 to 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 to 1.0)
    pub effects_volume: f32,
    pub auto_save: bool,
    /// Auto-save interval in seconds
    pub auto_save_interval_seconds: u32,
    pub show_damage_numbers: bool,
    pub show_combat_log: bool,
    pub haptic_feedback: bool,
    pub graphics_quality: GraphicsQuality,
    pub language: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            music_volume: 0.8,
            effects_volume: 0.8,
            auto_save: true,
            auto_save_interval_seconds: 300, // 5 minutes
            show_damage_numbers: true,
            show_combat_log: true,
            haptic_feedback: true,
            graphics_quality: GraphicsQuality::default(),
            language: "zh-CN".to_string(),
        }
    }
}

impl GameSettings {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parses `json`, or returns defaults when it is unreadable.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to parse settings: {}, using defaults", e);
                Self::default()
            }
        }
    }
}
