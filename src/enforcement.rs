//! Outbound countermeasure collaborators
//!
//! The engine decides *that* a countermeasure fires; the host server carries
//! it out. Calls are fire-and-forget: the engine neither retries nor observes
//! failures, those subsystems are robust on their own.

use crate::config::JailConfig;
use crate::engine::PlayerGuid;

/// Localized notification, keyed by variant with interpolation arguments.
/// The host resolves each variant to per-locale text.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Broadcast naming a player whose report count crossed the warning
    /// threshold.
    CheatWarning { player: String, reports: u64 },
    KickAnnounce { player: String },
    BanAnnounce { player: String },
    JailAnnounce { player: String },
    /// Whispered to both duelists when one of them blinks across the arena.
    DuelTeleportWarning { player: PlayerGuid, opponent: PlayerGuid },
}

/// Permanent-ban request with the engine's fixed authoring identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanRequest {
    /// Zero means permanent.
    pub duration_secs: u64,
    pub reason: &'static str,
    pub author: &'static str,
}

/// Countermeasure sink implemented by the host server.
pub trait Enforcement {
    fn notify(&self, notice: Notice);

    /// Forcibly disconnect the player's session.
    fn kick(&self, guid: PlayerGuid);

    /// Ban the owning account.
    fn ban(&self, guid: PlayerGuid, request: BanRequest);

    /// Teleport to the jail location, rebind the recall point there, and
    /// apply the configured lockdown debuffs.
    fn jail(&self, guid: PlayerGuid, jail: &JailConfig);
}
