//! Liquid-surface heuristics: walking on water, gliding on a fixed Z, and
//! moving under water without ever swimming.
//!
//! The dispatcher treats walk-on-water and z-axis as mutually exclusive: the
//! former runs while the world classifies the player as standing on
//! water-walkable liquid, the latter everywhere else.

use crate::checks::{DetectionType, Previous, Violation};
use crate::config::MovementData;
use crate::constants::ZAXIS_FLOOR_MARGIN;
use crate::movement::{MoveOpcode, MovementFlags, MovementSample};
use crate::world::{AuraKind, LiquidStatus, WorldView};

fn covering_water_aura(world: &dyn WorldView) -> bool {
    world.has_aura(AuraKind::WaterWalk)
        || world.has_aura(AuraKind::FeatherFall)
        || world.has_aura(AuraKind::SafeFall)
}

pub fn walk_on_water(
    sample: &MovementSample,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
) -> Option<Violation> {
    let prev = prev?;

    if sample.position.same_xy(&prev.sample.position) {
        return None;
    }

    // Ghosts run across water to their corpse; the deferred teleport marker
    // covers the packet right after a spirit release.
    if world.has_aura(AuraKind::Ghost) || prev.opcode == MoveOpcode::GhostTeleportDelay {
        return None;
    }

    if world.liquid_status() == LiquidStatus::WaterWalk && !sample.flags.any_flying() {
        return Some(Violation::new(
            DetectionType::WaterWalk,
            "standing on the water surface",
        ));
    }

    let prev_flagged = prev.sample.flags.contains(MovementFlags::WATERWALKING);
    let cur_flagged = sample.flags.contains(MovementFlags::WATERWALKING);
    if !prev_flagged && !cur_flagged {
        return None;
    }
    if covering_water_aura(world) {
        return None;
    }

    Some(Violation::new(
        DetectionType::WaterWalk,
        "water-walking flag without a granting aura",
    ))
}

pub fn zaxis(
    sample: &MovementSample,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
    data: &MovementData,
) -> Option<Violation> {
    let prev = prev?;

    if sample.flags.any_flying() || sample.flags.contains(MovementFlags::WATERWALKING) {
        return None;
    }
    if matches!(world.liquid_status(), LiquidStatus::InWater | LiquidStatus::UnderWater)
        || world.is_dead()
    {
        return None;
    }
    if data.is_excluded_area(world.map_id(), world.zone_id(), world.area_id()) {
        return None;
    }
    // Boats and docks sit above the surface.
    if world.liquid_status() == LiquidStatus::AboveWater {
        return None;
    }

    if sample.position.distance_2d(&prev.sample.position) == 0.0 {
        return None;
    }

    if sample.position.z == prev.sample.position.z
        && sample.position.z >= world.floor_z() + ZAXIS_FLOOR_MARGIN
    {
        return Some(Violation::new(
            DetectionType::ZAxis,
            format!("gliding dead level at z {:.1} above the floor", sample.position.z),
        ));
    }

    None
}

pub fn anti_swim(
    sample: &MovementSample,
    opcode: MoveOpcode,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
    data: &MovementData,
) -> Option<Violation> {
    let prev = prev?;

    if world.liquid_status() != LiquidStatus::UnderWater {
        return None;
    }
    if data.is_swim_excluded_zone(world.zone_id()) {
        return None;
    }
    if opcode == MoveOpcode::Jump {
        return None;
    }

    let falling_or_swimming = |flags: MovementFlags| {
        flags.any_falling() || flags.contains(MovementFlags::SWIMMING)
    };
    if falling_or_swimming(sample.flags) || falling_or_swimming(prev.sample.flags) {
        return None;
    }

    Some(Violation::new(
        DetectionType::AntiSwim,
        "under water without ever swimming",
    ))
}
