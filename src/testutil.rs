//! Shared test fixtures: a scripted world view and sample builders.

use std::cell::Cell;

use crate::engine::PlayerGuid;
use crate::movement::{MovementFlags, MovementSample, Position};
use crate::world::{
    AccountTier, AuraKind, BattlegroundState, LiquidStatus, MovementMode, WorldView,
};

/// World view backed by plain fields the test sets up front.
pub struct MockWorld {
    pub name: String,
    pub tier: AccountTier,
    pub gamemaster: bool,
    pub latency: u32,
    pub map: u32,
    pub zone: u32,
    pub area: u32,
    pub flight_path: bool,
    pub transport: bool,
    pub vehicle: bool,
    pub dead: bool,
    pub rooted: bool,
    pub duel_opponent: Option<PlayerGuid>,
    pub auras: Vec<AuraKind>,
    pub walk_cap: f32,
    pub run_cap: f32,
    pub swim_cap: f32,
    pub flight_cap: f32,
    pub liquid: LiquidStatus,
    pub water_z: f32,
    pub ground_z: f32,
    pub near_z: f32,
    pub floor: f32,
    pub safe_fall: f32,
    pub fall_immune: bool,
    pub battleground: Option<BattlegroundState>,
    pub teleport_allowance: Cell<bool>,
    pub knockback_allowance: Cell<bool>,
}

impl Default for MockWorld {
    fn default() -> Self {
        Self {
            name: "Tester".to_string(),
            tier: AccountTier::Player,
            gamemaster: false,
            latency: 50,
            map: 0,
            zone: 0,
            area: 0,
            flight_path: false,
            transport: false,
            vehicle: false,
            dead: false,
            rooted: false,
            duel_opponent: None,
            auras: Vec::new(),
            walk_cap: 2.5,
            run_cap: 7.0,
            swim_cap: 4.72,
            flight_cap: 32.0,
            liquid: LiquidStatus::NoWater,
            water_z: 0.0,
            ground_z: 0.0,
            near_z: 0.0,
            floor: 0.0,
            safe_fall: 0.0,
            fall_immune: false,
            battleground: None,
            teleport_allowance: Cell::new(false),
            knockback_allowance: Cell::new(false),
        }
    }
}

impl MockWorld {
    pub fn with_aura(mut self, kind: AuraKind) -> Self {
        self.auras.push(kind);
        self
    }
}

impl WorldView for MockWorld {
    fn player_name(&self) -> &str {
        &self.name
    }

    fn account_tier(&self) -> AccountTier {
        self.tier
    }

    fn is_gamemaster(&self) -> bool {
        self.gamemaster
    }

    fn latency_ms(&self) -> u32 {
        self.latency
    }

    fn map_id(&self) -> u32 {
        self.map
    }

    fn zone_id(&self) -> u32 {
        self.zone
    }

    fn area_id(&self) -> u32 {
        self.area
    }

    fn in_flight_path(&self) -> bool {
        self.flight_path
    }

    fn on_transport(&self) -> bool {
        self.transport
    }

    fn on_vehicle(&self) -> bool {
        self.vehicle
    }

    fn is_dead(&self) -> bool {
        self.dead
    }

    fn is_rooted(&self) -> bool {
        self.rooted
    }

    fn duel_opponent(&self) -> Option<PlayerGuid> {
        self.duel_opponent
    }

    fn has_aura(&self, kind: AuraKind) -> bool {
        self.auras.contains(&kind)
    }

    fn speed_cap(&self, mode: MovementMode) -> f32 {
        match mode {
            MovementMode::Walk => self.walk_cap,
            MovementMode::Run => self.run_cap,
            MovementMode::Swim => self.swim_cap,
            MovementMode::Flight => self.flight_cap,
        }
    }

    fn liquid_status(&self) -> LiquidStatus {
        self.liquid
    }

    fn water_level(&self, _x: f32, _y: f32) -> f32 {
        self.water_z
    }

    fn ground_height(&self, _x: f32, _y: f32) -> f32 {
        self.ground_z
    }

    fn height_near(&self, _x: f32, _y: f32, _z: f32) -> f32 {
        self.near_z
    }

    fn floor_z(&self) -> f32 {
        self.floor
    }

    fn safe_fall_modifier(&self) -> f32 {
        self.safe_fall
    }

    fn immune_to_fall_damage(&self) -> bool {
        self.fall_immune
    }

    fn battleground(&self) -> Option<BattlegroundState> {
        self.battleground
    }

    fn has_teleport_allowance(&self) -> bool {
        self.teleport_allowance.get()
    }

    fn revoke_teleport_allowance(&self) {
        self.teleport_allowance.set(false);
    }

    fn has_knockback_allowance(&self) -> bool {
        self.knockback_allowance.get()
    }

    fn consume_knockback_allowance(&self) {
        self.knockback_allowance.set(false);
    }
}

/// Opt-in log output while debugging a failing test: RUST_LOG=debug cargo test.
pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Stationary sample at the given position.
pub fn sample_at(x: f32, y: f32, z: f32) -> MovementSample {
    MovementSample {
        position: Position::new(x, y, z, 0.0),
        flags: MovementFlags::empty(),
        fall_speed: 0.0,
        client_ms: 0,
    }
}

/// Sample with an explicit client timestamp.
pub fn sample_at_ms(x: f32, y: f32, z: f32, ms: u32) -> MovementSample {
    MovementSample { client_ms: ms, ..sample_at(x, y, z) }
}

/// Sample with flags set.
pub fn flagged(x: f32, y: f32, z: f32, flags: MovementFlags) -> MovementSample {
    MovementSample { flags, ..sample_at(x, y, z) }
}
