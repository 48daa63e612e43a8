//! Teleport-to-plane heuristic
//!
//! No-clip cheats commonly snap the player onto an invisible horizontal
//! plane. The giveaway is a disagreement between the two terrain probes: the
//! first ground hit from above and the floor layer nearest the player's Z.
//! When those differ and the player's Z has drifted off the tracked floor,
//! the reported position is standing on a floor that is not there.

use crate::checks::{DetectionType, Previous, Violation};
use crate::config::MovementData;
use crate::constants::PLANE_Z_GAP;
use crate::movement::{MoveOpcode, MovementFlags, MovementSample};
use crate::world::{AuraKind, LiquidStatus, WorldView};

pub fn check(
    sample: &MovementSample,
    opcode: MoveOpcode,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
    data: &MovementData,
) -> Option<Violation> {
    let prev = prev?;

    if sample.position.same_xy(&prev.sample.position) {
        return None;
    }

    if data.is_excluded_area(world.map_id(), world.zone_id(), world.area_id()) {
        return None;
    }
    if world.has_aura(AuraKind::WaterWalk)
        || world.has_aura(AuraKind::WaterBreathing)
        || world.has_aura(AuraKind::Ghost)
    {
        return None;
    }
    if prev.opcode == MoveOpcode::Jump || opcode == MoveOpcode::FallLand {
        return None;
    }
    if world.liquid_status() == LiquidStatus::AboveWater {
        return None;
    }
    if sample.flags.any_falling()
        || sample.flags.contains(MovementFlags::SWIMMING)
        || sample.flags.any_flying()
    {
        return None;
    }

    let pos = sample.position;
    let ground = world.ground_height(pos.x, pos.y);
    let near = world.height_near(pos.x, pos.y, pos.z);

    if ground != near && (world.floor_z() - pos.z).abs() > PLANE_Z_GAP {
        return Some(Violation::new(
            DetectionType::TeleportPlane,
            format!("standing on a phantom floor layer at z {:.1}", pos.z),
        ));
    }

    None
}
