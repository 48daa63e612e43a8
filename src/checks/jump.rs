//! Jump heuristic
//!
//! Two triggers: a jump opcode arriving while the previous opcode was already
//! a jump (an impossible mid-air double-jump), and — in stricter mode — a
//! jump whose starting conditions are inconsistent with a legitimate hop near
//! the ground.

use crate::checks::{DetectionType, Previous, Violation};
use crate::constants::{GRAVITY_FALL_SPEED_EPSILON, JUMP_HEIGHT_EPSILON, WATER_SURFACE_BAND};
use crate::movement::{MoveOpcode, MovementFlags, MovementSample};
use crate::world::{AuraKind, WorldView};

pub fn check(
    sample: &MovementSample,
    opcode: MoveOpcode,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
    stricter: bool,
) -> Option<Violation> {
    let prev = prev?;

    if opcode != MoveOpcode::Jump {
        return None;
    }

    if prev.opcode == MoveOpcode::Jump {
        return Some(Violation::new(DetectionType::Jump, "double jump"));
    }

    if !stricter {
        return None;
    }

    if sample.flags.any_falling() {
        return None;
    }
    if world.has_aura(AuraKind::Fly) {
        return None;
    }

    // Bobbing at the water surface emits jump opcodes.
    let pos = sample.position;
    let water = world.water_level(pos.x, pos.y);
    if (pos.z - water).abs() <= WATER_SURFACE_BAND {
        return None;
    }

    let gravity_absent = sample.fall_speed < GRAVITY_FALL_SPEED_EPSILON
        && sample.flags.contains(MovementFlags::DISABLE_GRAVITY);
    if gravity_absent {
        return None;
    }

    let height_above_ground = pos.z - world.ground_height(pos.x, pos.y);
    if height_above_ground > JUMP_HEIGHT_EPSILON && pos.z >= prev.sample.position.z {
        return Some(Violation::new(
            DetectionType::Jump,
            format!("jump started {:.1} above the ground", height_above_ground),
        ));
    }

    None
}
