// Tick and timing
pub const CHECK_INTERVAL_SECONDS: u64 = 1;
pub const PILL_EFFECT_DURATION_SECONDS: f64 = 300.0;

// Power gain per second: BASE + comprehension / DIVISOR + tier level
pub const BASE_POWER_PER_SECOND: u64 = 1;
pub const COMPREHENSION_POWER_DIVISOR: u32 = 10;

// Experience and leveling
pub const XP_PER_LEVEL: u64 = 100;
pub const LEVEL_UP_ATTRIBUTE_POINTS: u32 = 2;

// Breakthrough rewards
pub const BREAKTHROUGH_ATTRIBUTE_POINTS: u32 = 5;
pub const BREAKTHROUGH_CURRENCY_PER_TIER_LEVEL: u64 = 100;

// Character attributes
pub const BASE_ATTRIBUTE_VALUE: u32 = 10;
pub const NUM_ATTRIBUTES: usize = 5;

// Character defaults
pub const STARTING_CURRENCY: u64 = 100;
pub const DEFAULT_CHARACTER_NAME: &str = "Daoist";
pub const MAX_ACTIVE_ABILITIES: usize = 4;

// Items
pub const ITEM_LEVEL_POWER: u64 = 10;
pub const ITEM_UPGRADE_FACTOR: f64 = 1.1;
pub const CONSUMABLE_MAX_STACK: u32 = 99;

// Ability leveling factors
pub const ABILITY_COST_GROWTH: f64 = 1.1;
pub const ABILITY_BASE_DAMAGE_GROWTH: f64 = 1.2;
pub const ABILITY_MULTIPLIER_GROWTH: f64 = 1.05;
pub const ABILITY_EFFECT_GROWTH: f64 = 1.15;
pub const ABILITY_DEFAULT_MAX_LEVEL: u32 = 10;

// Ability costs: level * PER_LEVEL + unlock tier level * PER_TIER
pub const ABILITY_LEARN_COST_PER_LEVEL: u64 = 100;
pub const ABILITY_LEARN_COST_PER_TIER: u64 = 500;
pub const ABILITY_UPGRADE_COST_PER_LEVEL: u64 = 200;
pub const ABILITY_UPGRADE_COST_PER_TIER: u64 = 300;

// Combo abilities
pub const COMBO_BASE_DAMAGE: u32 = 100;
pub const COMBO_DAMAGE_PER_LEVEL: u32 = 20;
pub const COMBO_DAMAGE_MULTIPLIER: f64 = 2.5;
pub const COMBO_CRIT_CHANCE: f64 = 0.3;
pub const COMBO_RESOURCE_COST: u32 = 80;
pub const COMBO_COOLDOWN_SECONDS: f64 = 12.0;

// Random event roll: uniform in [1, RANDOM_EVENT_ROLL_MAX]
pub const RANDOM_EVENT_ROLL_MAX: u32 = 1000;
pub const RARE_ITEM_ROLL_MAX: u32 = 5; // 0.5%
pub const NARRATIVE_EVENT_ROLL_MAX: u32 = 20; // 1.5%

// Save format
pub const SAVE_VERSION_MAGIC: u64 = 0x5849_5558_4941_4E01; // "XIUXIAN" + v1
