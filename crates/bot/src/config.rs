//! Tunable thresholds for the bot's decision rules.

use std::env;
use std::path::Path;

use serde::Deserialize;

/// Exact fraction used for threshold comparisons (`numerator / denominator`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Ratio {
    pub numerator: u32,
    pub denominator: u32,
}

impl Ratio {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns `value < reference * self` without leaving integer arithmetic.
    pub fn below(self, value: u32, reference: u32) -> bool {
        u64::from(value) * u64::from(self.denominator)
            < u64::from(reference) * u64::from(self.numerator)
    }
}

/// Decision thresholds and scoring constants.
///
/// Every field has a default, so a TOML file only needs to list the values it
/// changes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Below this many milliseconds left, head home with a partial load.
    pub low_time_threshold_ms: u64,
    pub min_diamonds_low_time_return: u32,
    /// Minimum load worth protecting when a rival is within `enemy_flee_distance`.
    pub min_diamonds_to_flee: u32,
    pub enemy_flee_distance: u32,
    pub min_diamonds_near_base_return: u32,
    /// The bot only hunts rivals while carrying at most this many diamonds.
    pub max_own_diamonds_for_aggression: u32,
    pub min_enemy_diamonds_to_attack: u32,
    /// Inventory size. A full inventory always sends the bot home.
    pub diamond_cap: u32,
    /// Opportunistic return fires when the base is closer than this fraction
    /// of the last recorded diamond distance.
    pub opportunistic_ratio: Ratio,
    /// Regions per axis for block clustering.
    pub cluster_grid: u32,
    /// Bonus for a region whose diamonds alone fill the remaining capacity.
    pub cluster_fill_bonus: u32,
    /// Point value of the diamonds skipped (and avoided) at `diamond_cap - 1`.
    pub heavy_diamond_points: u32,
}

impl BotConfig {
    pub const DEFAULT_LOW_TIME_THRESHOLD_MS: u64 = 7_000;
    pub const DEFAULT_DIAMOND_CAP: u32 = 5;

    pub fn new() -> Self {
        Self {
            low_time_threshold_ms: Self::DEFAULT_LOW_TIME_THRESHOLD_MS,
            min_diamonds_low_time_return: 2,
            min_diamonds_to_flee: 3,
            enemy_flee_distance: 2,
            min_diamonds_near_base_return: 3,
            max_own_diamonds_for_aggression: 2,
            min_enemy_diamonds_to_attack: 2,
            diamond_cap: Self::DEFAULT_DIAMOND_CAP,
            opportunistic_ratio: Ratio::new(3, 4),
            cluster_grid: 3,
            cluster_fill_bonus: 10,
            heavy_diamond_points: 2,
        }
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bot config TOML: {}", e))
    }

    /// Defaults overridden by process environment variables.
    ///
    /// See [`BotConfig::apply_env`] for the recognised keys.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overrides individual values from `BOT_*` environment variables:
    ///
    /// - `BOT_LOW_TIME_THRESHOLD_MS`
    /// - `BOT_MIN_DIAMONDS_LOW_TIME_RETURN` / `BOT_MIN_DIAMONDS_TO_FLEE` /
    ///   `BOT_MIN_DIAMONDS_NEAR_BASE_RETURN`
    /// - `BOT_ENEMY_FLEE_DISTANCE`
    /// - `BOT_MAX_OWN_DIAMONDS_FOR_AGGRESSION` / `BOT_MIN_ENEMY_DIAMONDS_TO_ATTACK`
    /// - `BOT_DIAMOND_CAP`
    pub fn apply_env(&mut self) {
        if let Some(ms) = read_env::<u64>("BOT_LOW_TIME_THRESHOLD_MS") {
            self.low_time_threshold_ms = ms;
        }
        if let Some(n) = read_env::<u32>("BOT_MIN_DIAMONDS_LOW_TIME_RETURN") {
            self.min_diamonds_low_time_return = n;
        }
        if let Some(n) = read_env::<u32>("BOT_MIN_DIAMONDS_TO_FLEE") {
            self.min_diamonds_to_flee = n;
        }
        if let Some(n) = read_env::<u32>("BOT_ENEMY_FLEE_DISTANCE") {
            self.enemy_flee_distance = n;
        }
        if let Some(n) = read_env::<u32>("BOT_MIN_DIAMONDS_NEAR_BASE_RETURN") {
            self.min_diamonds_near_base_return = n;
        }
        if let Some(n) = read_env::<u32>("BOT_MAX_OWN_DIAMONDS_FOR_AGGRESSION") {
            self.max_own_diamonds_for_aggression = n;
        }
        if let Some(n) = read_env::<u32>("BOT_MIN_ENEMY_DIAMONDS_TO_ATTACK") {
            self.min_enemy_diamonds_to_attack = n;
        }
        if let Some(cap) = read_env::<u32>("BOT_DIAMOND_CAP") {
            self.diamond_cap = cap.max(1);
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Loader for bot configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> anyhow::Result<BotConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?;
        BotConfig::from_toml_str(&content)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
