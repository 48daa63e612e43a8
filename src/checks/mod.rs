//! Heuristic check battery
//!
//! Each submodule is one detector: a pure function of the current sample, the
//! opcode that carried it, the previously accepted sample, and read-only world
//! queries. A detector returns `Some(Violation)` or `None` and never touches
//! the per-player state; only the dispatcher commits samples.
//!
//! Every detector no-ops when there is no previous sample to compare against,
//! and most no-op on zero horizontal displacement (camera rotation in place
//! produces movement packets with identical position).

pub mod battleground;
pub mod climb;
pub mod control;
pub mod fall;
pub mod fly;
pub mod jump;
pub mod plane;
pub mod speed;
pub mod teleport;
pub mod water;

use crate::movement::{MoveOpcode, MovementSample};

/// Detection categories, one per heuristic. Each variant owns one slot in the
/// per-player counter arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectionType {
    Speed,
    Fly,
    WaterWalk,
    Jump,
    TeleportPlane,
    Climb,
    Teleport,
    IgnoreControl,
    ZAxis,
    AntiSwim,
    Gravity,
    AntiKnockBack,
    NoFallDamage,
    /// Reserved for opcode-acknowledgement tracking.
    OpAck,
}

impl DetectionType {
    pub const COUNT: usize = 14;

    pub const ALL: [DetectionType; Self::COUNT] = [
        DetectionType::Speed,
        DetectionType::Fly,
        DetectionType::WaterWalk,
        DetectionType::Jump,
        DetectionType::TeleportPlane,
        DetectionType::Climb,
        DetectionType::Teleport,
        DetectionType::IgnoreControl,
        DetectionType::ZAxis,
        DetectionType::AntiSwim,
        DetectionType::Gravity,
        DetectionType::AntiKnockBack,
        DetectionType::NoFallDamage,
        DetectionType::OpAck,
    ];

    /// Slot in the per-type counter arrays.
    pub fn index(self) -> usize {
        match self {
            DetectionType::Speed => 0,
            DetectionType::Fly => 1,
            DetectionType::WaterWalk => 2,
            DetectionType::Jump => 3,
            DetectionType::TeleportPlane => 4,
            DetectionType::Climb => 5,
            DetectionType::Teleport => 6,
            DetectionType::IgnoreControl => 7,
            DetectionType::ZAxis => 8,
            DetectionType::AntiSwim => 9,
            DetectionType::Gravity => 10,
            DetectionType::AntiKnockBack => 11,
            DetectionType::NoFallDamage => 12,
            DetectionType::OpAck => 13,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DetectionType::Speed => "speed",
            DetectionType::Fly => "fly",
            DetectionType::WaterWalk => "water-walk",
            DetectionType::Jump => "jump",
            DetectionType::TeleportPlane => "teleport-plane",
            DetectionType::Climb => "climb",
            DetectionType::Teleport => "teleport",
            DetectionType::IgnoreControl => "ignore-control",
            DetectionType::ZAxis => "z-axis",
            DetectionType::AntiSwim => "anti-swim",
            DetectionType::Gravity => "gravity",
            DetectionType::AntiKnockBack => "anti-knockback",
            DetectionType::NoFallDamage => "no-fall-damage",
            DetectionType::OpAck => "op-ack",
        }
    }

    /// Whether reports of this type pass through burst suppression. The
    /// exempt types are inherently rare one-shot events where debounce would
    /// hide real incidents.
    pub fn debounced(self) -> bool {
        !matches!(
            self,
            DetectionType::Jump
                | DetectionType::Teleport
                | DetectionType::IgnoreControl
                | DetectionType::Gravity
                | DetectionType::AntiKnockBack
                | DetectionType::NoFallDamage
                | DetectionType::OpAck
        )
    }
}

/// One triggered detection, with a human-readable reason for the log.
#[derive(Debug, Clone)]
pub struct Violation {
    pub detection: DetectionType,
    pub reason: String,
}

impl Violation {
    pub fn new(detection: DetectionType, reason: impl Into<String>) -> Self {
        Self { detection, reason: reason.into() }
    }
}

/// The previously accepted sample and the opcode that carried it.
#[derive(Debug, Clone, Copy)]
pub struct Previous<'a> {
    pub sample: &'a MovementSample,
    pub opcode: MoveOpcode,
}
