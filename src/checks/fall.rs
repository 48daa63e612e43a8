//! No-fall-damage heuristic
//!
//! Mirrors the world's own fall-damage formula: a drop owes damage once it
//! exceeds the formula's zero-crossing distance (adjusted by safe-fall
//! stats). If such a drop arrives without the falling flag on either sample,
//! the client suppressed the state that would have triggered the damage.

use crate::checks::{DetectionType, Previous, Violation};
use crate::constants::{FALL_DAMAGE_FACTOR, FALL_DAMAGE_OFFSET};
use crate::movement::MovementSample;
use crate::world::{AuraKind, LiquidStatus, WorldView};

/// Expected fall damage as a fraction of max health, matching the world's
/// fall handler. Negative below the zero-crossing distance.
pub fn expected_damage_fraction(z_diff: f32, safe_fall: f32, rate: f32) -> f32 {
    (FALL_DAMAGE_FACTOR * (z_diff - safe_fall) - FALL_DAMAGE_OFFSET) * rate
}

pub fn check(
    sample: &MovementSample,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
    fall_damage_rate: f32,
) -> Option<Violation> {
    let prev = prev?;

    if world.has_aura(AuraKind::Ghost) {
        return None;
    }
    if world.has_aura(AuraKind::WaterWalk)
        && world.liquid_status() == LiquidStatus::WaterWalk
        && !sample.flags.any_flying()
    {
        return None;
    }
    if world.has_aura(AuraKind::FeatherFall) || world.has_aura(AuraKind::SafeFall) {
        return None;
    }

    if sample.position.z >= prev.sample.position.z {
        return None;
    }
    let z_diff = prev.sample.position.z - sample.position.z;

    let damage = expected_damage_fraction(z_diff, world.safe_fall_modifier(), fall_damage_rate);
    if damage <= 0.0 {
        return None;
    }
    if world.immune_to_fall_damage() {
        return None;
    }

    // An honest client flags the descent; damage owed with the flag absent on
    // both samples means it was stripped.
    if sample.flags.any_falling() || prev.sample.flags.any_falling() {
        return None;
    }

    Some(Violation::new(
        DetectionType::NoFallDamage,
        format!("dropped {:.1} without reporting a fall", z_diff),
    ))
}
