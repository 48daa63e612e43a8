//! Client-reported movement data
//!
//! One [`MovementSample`] is decoded per movement packet by the host's
//! protocol layer and handed to the dispatcher together with the opcode that
//! carried it. The engine never partially mutates a sample; the per-player
//! state always replaces the previous sample wholesale.

use bitflags::bitflags;

use crate::constants::MIN_ELAPSED_MS;

bitflags! {
    /// Movement mode bits as reported by the client.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MovementFlags: u32 {
        const FORWARD         = 0x0000_0001;
        const BACKWARD        = 0x0000_0002;
        const STRAFE_LEFT     = 0x0000_0004;
        const STRAFE_RIGHT    = 0x0000_0008;
        const WALKING         = 0x0000_0100;
        const DISABLE_GRAVITY = 0x0000_0200;
        const ROOT            = 0x0000_0400;
        const FALLING         = 0x0000_0800;
        const FALLING_FAR     = 0x0000_1000;
        const SWIMMING        = 0x0020_0000;
        const ASCENDING       = 0x0040_0000;
        const DESCENDING      = 0x0080_0000;
        const CAN_FLY         = 0x0100_0000;
        const FLYING          = 0x0200_0000;
        const WATERWALKING    = 0x0400_0000;
        const HOVER           = 0x4000_0000;
        const ON_TRANSPORT    = 0x0000_0020;
    }
}

impl MovementFlags {
    /// Either falling bit set.
    pub fn any_falling(self) -> bool {
        self.intersects(Self::FALLING | Self::FALLING_FAR)
    }

    /// Flying or allowed to fly.
    pub fn any_flying(self) -> bool {
        self.intersects(Self::FLYING | Self::CAN_FLY)
    }
}

/// The movement opcodes this engine distinguishes. Everything else arrives as
/// [`MoveOpcode::Heartbeat`] or [`MoveOpcode::Other`]; the discriminator is
/// opaque beyond these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOpcode {
    Heartbeat,
    /// Jump-start.
    Jump,
    /// Landing at the end of a fall.
    FallLand,
    /// Deferred teleport acknowledgement while dead (ghost).
    GhostTeleportDelay,
    #[default]
    Other,
}

/// World position plus facing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub orientation: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32, orientation: f32) -> Self {
        Self { x, y, z, orientation }
    }

    /// Horizontal distance, ignoring Z.
    pub fn distance_2d(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when X and Y are bit-identical to `other` (camera rotation in
    /// place produces such packets).
    pub fn same_xy(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// One decoded movement packet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementSample {
    pub position: Position,
    pub flags: MovementFlags,
    /// Vertical fall speed, downward-positive.
    pub fall_speed: f32,
    /// Client-reported timestamp in milliseconds. Monotonic on an honest
    /// client, wraps at u32::MAX.
    pub client_ms: u32,
}

impl MovementSample {
    /// Milliseconds elapsed since `prev`, floored to [`MIN_ELAPSED_MS`].
    ///
    /// Returns `None` when this sample's timestamp runs backward relative to
    /// the previous one; the speed check treats that alone as a violation.
    pub fn elapsed_since(&self, prev: &MovementSample) -> Option<u32> {
        if self.client_ms < prev.client_ms {
            return None;
        }
        Some((self.client_ms - prev.client_ms).max(MIN_ELAPSED_MS))
    }
}
