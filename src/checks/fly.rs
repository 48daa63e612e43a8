//! Fly heuristic: flight flags without a flight-granting aura.

use crate::checks::{DetectionType, Previous, Violation};
use crate::movement::{MovementFlags, MovementSample};
use crate::world::{AuraKind, LiquidStatus, WorldView};

pub fn check(
    sample: &MovementSample,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
    stricter: bool,
) -> Option<Violation> {
    prev?;

    if world.has_aura(AuraKind::Fly) {
        return None;
    }

    if sample.flags.any_flying() {
        return Some(Violation::new(
            DetectionType::Fly,
            "flight flags set without a flight aura",
        ));
    }

    // Stricter mode also treats ascending as a flight indicator. Ascending
    // inside water is an ordinary swim-up.
    if stricter
        && sample.flags.contains(MovementFlags::ASCENDING)
        && !sample.flags.contains(MovementFlags::SWIMMING)
        && !matches!(world.liquid_status(), LiquidStatus::InWater | LiquidStatus::UnderWater)
    {
        return Some(Violation::new(
            DetectionType::Fly,
            "ascending outside water without a flight aura",
        ));
    }

    None
}
