//! Configuration for the anti-cheat engine
//!
//! Two TOML files make up the whole configuration:
//!
//! - `anticheat.toml` — the tuning knobs: master switch, per-heuristic
//!   enables, countermeasure thresholds, jail destination.
//! - `movement_data.toml` — map-keyed data the heuristics consult: transport
//!   map allow-list, known false-positive areas, battleground starting pens.
//!
//! Both are loaded at startup and on reload events; in between the engine
//! reads an immutable snapshot, so a reload never tears a dispatch in half.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::{
    BURST_PROMOTE_AT, BURST_WINDOW_SECS, DEFAULT_BAN_THRESHOLD, DEFAULT_JAIL_THRESHOLD,
    DEFAULT_KICK_THRESHOLD, DEFAULT_WARNING_THRESHOLD,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything the engine needs, loaded as one unit.
#[derive(Debug, Clone)]
pub struct WardenConfig {
    pub anticheat: AnticheatConfig,
    pub data: MovementData,
}

impl WardenConfig {
    /// Load both configuration files from the given directory.
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let dir = Path::new(config_dir);
        let anticheat = load_toml::<AnticheatConfig>(&dir.join("anticheat.toml"))?;
        let data_raw = load_toml::<MovementDataRaw>(&dir.join("movement_data.toml"))?;
        Ok(Self { anticheat, data: data_raw.into() })
    }
}

// =============================================================================
// anticheat.toml
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AnticheatConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Also run detections against game masters and elevated accounts.
    #[serde(default)]
    pub check_gamemasters: bool,
    /// Multiplier the world applies to fall damage; the no-fall-damage check
    /// mirrors it so both sides compute the same expected damage.
    #[serde(default = "default_fall_damage_rate")]
    pub fall_damage_rate: f32,
    #[serde(default)]
    pub detections: DetectionToggles,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub penalties: Penalties,
    #[serde(default)]
    pub burst: BurstConfig,
    #[serde(default)]
    pub jail: JailConfig,
}

impl Default for AnticheatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            check_gamemasters: false,
            fall_damage_rate: default_fall_damage_rate(),
            detections: DetectionToggles::default(),
            thresholds: Thresholds::default(),
            penalties: Penalties::default(),
            burst: BurstConfig::default(),
            jail: JailConfig::default(),
        }
    }
}

/// One enable flag per heuristic, plus the two stricter-mode switches.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionToggles {
    #[serde(default = "default_true")]
    pub speed: bool,
    #[serde(default = "default_true")]
    pub fly: bool,
    #[serde(default = "default_true")]
    pub jump: bool,
    #[serde(default = "default_true")]
    pub teleport_plane: bool,
    #[serde(default = "default_true")]
    pub climb: bool,
    #[serde(default = "default_true")]
    pub teleport: bool,
    #[serde(default = "default_true")]
    pub ignore_control: bool,
    #[serde(default = "default_true")]
    pub gravity: bool,
    #[serde(default = "default_true")]
    pub water_walk: bool,
    #[serde(default = "default_true")]
    pub zaxis: bool,
    #[serde(default = "default_true")]
    pub anti_swim: bool,
    #[serde(default = "default_true")]
    pub anti_knockback: bool,
    #[serde(default = "default_true")]
    pub no_fall_damage: bool,
    #[serde(default = "default_true")]
    pub battleground_start: bool,
    /// Stricter fly detection: ascending outside water is suspect.
    #[serde(default)]
    pub stricter_fly: bool,
    /// Stricter jump detection: single jumps are checked against ground
    /// height, not just double-jumps.
    #[serde(default)]
    pub stricter_jump: bool,
}

impl Default for DetectionToggles {
    fn default() -> Self {
        Self {
            speed: true,
            fly: true,
            jump: true,
            teleport_plane: true,
            climb: true,
            teleport: true,
            ignore_control: true,
            gravity: true,
            water_walk: true,
            zaxis: true,
            anti_swim: true,
            anti_knockback: true,
            no_fall_damage: true,
            battleground_start: true,
            stricter_fly: false,
            stricter_jump: false,
        }
    }
}

/// Lifetime report counts at which countermeasures engage.
#[derive(Debug, Clone, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_warning_threshold")]
    pub warning: u32,
    #[serde(default = "default_kick_threshold")]
    pub kick: u32,
    #[serde(default = "default_ban_threshold")]
    pub ban: u32,
    #[serde(default = "default_jail_threshold")]
    pub jail: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: DEFAULT_WARNING_THRESHOLD,
            kick: DEFAULT_KICK_THRESHOLD,
            ban: DEFAULT_BAN_THRESHOLD,
            jail: DEFAULT_JAIL_THRESHOLD,
        }
    }
}

/// Per-countermeasure enable and announcement switches.
#[derive(Debug, Clone, Deserialize)]
pub struct Penalties {
    #[serde(default = "default_true")]
    pub warn_enabled: bool,
    #[serde(default)]
    pub kick_enabled: bool,
    #[serde(default)]
    pub announce_kick: bool,
    #[serde(default)]
    pub ban_enabled: bool,
    #[serde(default)]
    pub announce_ban: bool,
    #[serde(default)]
    pub jail_enabled: bool,
    #[serde(default)]
    pub announce_jail: bool,
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            warn_enabled: true,
            kick_enabled: false,
            announce_kick: false,
            ban_enabled: false,
            announce_ban: false,
            jail_enabled: false,
            announce_jail: false,
        }
    }
}

/// Debounce tuning for the burst-suppressed detection types.
#[derive(Debug, Clone, Deserialize)]
pub struct BurstConfig {
    #[serde(default = "default_burst_window")]
    pub window_secs: u64,
    #[serde(default = "default_burst_promote")]
    pub promote_at: u32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            window_secs: BURST_WINDOW_SECS,
            promote_at: BURST_PROMOTE_AT,
        }
    }
}

/// Destination and standing effects for the jail countermeasure.
#[derive(Debug, Clone, Deserialize)]
pub struct JailConfig {
    #[serde(default = "default_jail_map")]
    pub map_id: u32,
    #[serde(default = "default_jail_x")]
    pub x: f32,
    #[serde(default = "default_jail_y")]
    pub y: f32,
    #[serde(default = "default_jail_z")]
    pub z: f32,
    #[serde(default)]
    pub orientation: f32,
    /// Debuff spell ids applied on arrival: immobilize, queue-deserter
    /// markers, silence.
    #[serde(default = "default_jail_debuffs")]
    pub debuffs: Vec<u32>,
}

impl Default for JailConfig {
    fn default() -> Self {
        Self {
            map_id: default_jail_map(),
            x: default_jail_x(),
            y: default_jail_y(),
            z: default_jail_z(),
            orientation: 0.0,
            debuffs: default_jail_debuffs(),
        }
    }
}

fn default_true() -> bool { true }
fn default_fall_damage_rate() -> f32 { 1.0 }
fn default_warning_threshold() -> u32 { DEFAULT_WARNING_THRESHOLD }
fn default_kick_threshold() -> u32 { DEFAULT_KICK_THRESHOLD }
fn default_ban_threshold() -> u32 { DEFAULT_BAN_THRESHOLD }
fn default_jail_threshold() -> u32 { DEFAULT_JAIL_THRESHOLD }
fn default_burst_window() -> u64 { BURST_WINDOW_SECS }
fn default_burst_promote() -> u32 { BURST_PROMOTE_AT }
fn default_jail_map() -> u32 { 1 }
fn default_jail_x() -> f32 { 16226.5 }
fn default_jail_y() -> f32 { 16403.6 }
fn default_jail_z() -> f32 { -64.4 }
fn default_jail_debuffs() -> Vec<u32> { vec![9454, 26013, 1852] }

// =============================================================================
// movement_data.toml
// =============================================================================

/// Raw data file as parsed from TOML (string-keyed battleground tables).
#[derive(Debug, Clone, Deserialize, Default)]
struct MovementDataRaw {
    #[serde(default)]
    transport_maps: Vec<u32>,
    #[serde(default)]
    exclusion_areas: Vec<AreaTriple>,
    #[serde(default)]
    swim_exclusion_zones: Vec<u32>,
    #[serde(default)]
    battlegrounds: HashMap<String, BattlegroundPens>,
    #[serde(default)]
    high_z: Vec<HighZRule>,
}

/// Processed data with numeric battleground keys for direct lookup.
#[derive(Debug, Clone, Default)]
pub struct MovementData {
    /// Maps whose transports legitimately exceed player speed caps.
    pub transport_maps: Vec<u32>,
    /// (map, zone, area) triples with known terrain-probe false positives.
    pub exclusion_areas: Vec<AreaTriple>,
    /// Zones where the under-water classification misfires.
    pub swim_exclusion_zones: Vec<u32>,
    /// Starting pens per battleground map.
    pub battlegrounds: HashMap<u32, BattlegroundPens>,
    /// Per-map Z ceilings that stay in force after the battleground starts.
    pub high_z: Vec<HighZRule>,
}

impl From<MovementDataRaw> for MovementData {
    fn from(raw: MovementDataRaw) -> Self {
        Self {
            transport_maps: raw.transport_maps,
            exclusion_areas: raw.exclusion_areas,
            swim_exclusion_zones: raw.swim_exclusion_zones,
            battlegrounds: raw
                .battlegrounds
                .into_iter()
                .filter_map(|(k, v)| k.parse::<u32>().ok().map(|id| (id, v)))
                .collect(),
            high_z: raw.high_z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AreaTriple {
    pub map: u32,
    pub zone: u32,
    pub area: u32,
}

/// Axis-aligned starting pen per team.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BattlegroundPens {
    pub alliance: PenRect,
    pub horde: PenRect,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PenRect {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl PenRect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HighZRule {
    pub map: u32,
    pub max_z: f32,
}

impl MovementData {
    pub fn is_transport_map(&self, map_id: u32) -> bool {
        self.transport_maps.contains(&map_id)
    }

    pub fn is_excluded_area(&self, map: u32, zone: u32, area: u32) -> bool {
        self.exclusion_areas.contains(&AreaTriple { map, zone, area })
    }

    pub fn is_swim_excluded_zone(&self, zone: u32) -> bool {
        self.swim_exclusion_zones.contains(&zone)
    }

    pub fn pens(&self, map_id: u32) -> Option<&BattlegroundPens> {
        self.battlegrounds.get(&map_id)
    }

    pub fn high_z_ceiling(&self, map_id: u32) -> Option<f32> {
        self.high_z.iter().find(|r| r.map == map_id).map(|r| r.max_z)
    }
}

// =============================================================================
// Config Loading
// =============================================================================

fn load_toml<T>(path: &Path) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let path_str = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path_str.clone(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path_str,
        source: e,
    })
}
