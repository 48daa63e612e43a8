//! World and player queries consumed by the heuristics
//!
//! The host world server implements [`WorldView`] once per online player.
//! Every method is an in-memory lookup against already-loaded world state;
//! nothing here blocks. The two allowance hooks are the only mutating calls,
//! and they flip one-shot permission bits the host owns (interior mutability
//! on the host side keeps the trait `&self`).

use crate::engine::PlayerGuid;

/// The player's relationship to nearby liquid, as classified by the map data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiquidStatus {
    NoWater,
    /// Standing above the surface (boats, docks).
    AboveWater,
    /// Standing on a water-walkable liquid surface.
    WaterWalk,
    InWater,
    UnderWater,
}

/// Aura categories the heuristics consult. The host maps its own aura/spell
/// system onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuraKind {
    Fly,
    WaterWalk,
    WaterBreathing,
    FeatherFall,
    SafeFall,
    Ghost,
    Root,
}

/// Movement mode used to select the server-authoritative speed cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementMode {
    Walk,
    Run,
    Swim,
    Flight,
}

/// Security tier of the owning account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccountTier {
    Player,
    Moderator,
    GameMaster,
    Administrator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlegroundStatus {
    None,
    WaitQueue,
    /// Joined, gates not yet open.
    WaitJoin,
    InProgress,
    WaitLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Alliance,
    Horde,
}

/// Battleground membership snapshot.
#[derive(Debug, Clone, Copy)]
pub struct BattlegroundState {
    pub map_id: u32,
    pub status: BattlegroundStatus,
    pub team: Team,
}

/// Read-only view of one player and the world around them.
pub trait WorldView {
    /// Display name used in operator notices.
    fn player_name(&self) -> &str;

    fn account_tier(&self) -> AccountTier;
    fn is_gamemaster(&self) -> bool;
    /// Round-trip latency of the owning session in milliseconds.
    fn latency_ms(&self) -> u32;

    fn map_id(&self) -> u32;
    fn zone_id(&self) -> u32;
    fn area_id(&self) -> u32;

    /// Currently on a scripted flight path.
    fn in_flight_path(&self) -> bool;
    /// Attached to a transport (server-side attachment, not the client flag).
    fn on_transport(&self) -> bool;
    fn on_vehicle(&self) -> bool;

    fn is_dead(&self) -> bool;
    /// Rooted unit-state (server-side), as opposed to the ROOT movement flag.
    fn is_rooted(&self) -> bool;
    /// Opponent guid while a duel is in progress.
    fn duel_opponent(&self) -> Option<PlayerGuid>;

    fn has_aura(&self, kind: AuraKind) -> bool;
    /// Server-authoritative speed cap for the given mode, distance units per
    /// second.
    fn speed_cap(&self, mode: MovementMode) -> f32;

    fn liquid_status(&self) -> LiquidStatus;
    /// Water surface height at the given column.
    fn water_level(&self, x: f32, y: f32) -> f32;
    /// Terrain height probed from maximum height (first ground hit from
    /// above).
    fn ground_height(&self, x: f32, y: f32) -> f32;
    /// Terrain height probed at the given Z (nearest floor layer).
    fn height_near(&self, x: f32, y: f32, z: f32) -> f32;
    /// Floor height the world currently tracks for this player.
    fn floor_z(&self) -> f32;

    /// Fall distance reduction from safe-fall stats, in distance units.
    fn safe_fall_modifier(&self) -> f32;
    fn immune_to_fall_damage(&self) -> bool;

    fn battleground(&self) -> Option<BattlegroundState>;

    /// One-shot permission granted by the legitimate teleport path.
    fn has_teleport_allowance(&self) -> bool;
    fn revoke_teleport_allowance(&self);

    /// One-shot permission granted when the server knocks the player back.
    fn has_knockback_allowance(&self) -> bool;
    fn consume_knockback_allowance(&self);
}
