//! Server-side movement anti-cheat engine
//!
//! Embedded by the host world server: the protocol layer hands every decoded
//! movement packet to [`MovementWarden::dispatch`], which runs a battery of
//! independent heuristics against the player's previously accepted sample,
//! feeds any violation through burst suppression into per-player report
//! counters, and triggers escalating countermeasures (warning, kick, ban,
//! jail) once configured thresholds are crossed.
//!
//! The engine owns no world state and performs no I/O: the world is queried
//! through [`world::WorldView`] and countermeasures are carried out through
//! [`enforcement::Enforcement`], both implemented by the host.
//!
//! ```no_run
//! use movement_warden::{MovementWarden, WardenConfig};
//!
//! let warden = MovementWarden::new(WardenConfig::load("config")?);
//! warden.register_player(42);
//! // per packet: warden.dispatch(42, &world_view, &enforcement, sample, opcode);
//! # Ok::<(), movement_warden::ConfigError>(())
//! ```

pub mod checks;
pub mod config;
pub mod constants;
pub mod enforcement;
pub mod engine;
pub mod movement;
pub mod report;
pub mod state;
pub mod world;

#[cfg(test)]
pub(crate) mod testutil;

pub use checks::{DetectionType, Violation};
pub use config::{AnticheatConfig, ConfigError, MovementData, WardenConfig};
pub use enforcement::{BanRequest, Enforcement, Notice};
pub use engine::{spawn_housekeeping, MovementWarden, PlayerGuid};
pub use movement::{MoveOpcode, MovementFlags, MovementSample, Position};
pub use report::ReportSummary;
pub use world::{AccountTier, AuraKind, LiquidStatus, MovementMode, Team, WorldView};
