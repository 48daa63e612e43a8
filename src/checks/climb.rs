//! Climb heuristic: scaling surfaces steeper than any walkable slope.

use crate::checks::{DetectionType, Previous, Violation};
use crate::constants::{CLIMB_MIN_RISE, MAX_CLIMB_ANGLE};
use crate::movement::{MoveOpcode, MovementFlags, MovementSample};
use crate::world::{LiquidStatus, WorldView};

pub fn check(
    sample: &MovementSample,
    opcode: MoveOpcode,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
) -> Option<Violation> {
    let prev = prev?;

    // Climbing game objects (ladders, ropes) arrives as jump opcodes.
    if opcode == MoveOpcode::Jump {
        return None;
    }
    if matches!(world.liquid_status(), LiquidStatus::InWater | LiquidStatus::UnderWater) {
        return None;
    }
    if sample.flags.contains(MovementFlags::SWIMMING)
        || sample.flags.any_flying()
        || sample.flags.any_falling()
    {
        return None;
    }

    let rise = sample.position.z - prev.sample.position.z;
    if rise <= CLIMB_MIN_RISE {
        return None;
    }

    let run = sample.position.distance_2d(&prev.sample.position);
    let angle = (rise / run).atan(); // run == 0 degenerates to a vertical ascent
    if angle > MAX_CLIMB_ANGLE {
        return Some(Violation::new(
            DetectionType::Climb,
            format!("ascended {:.1} over {:.1} ({:.2} rad)", rise, run, angle),
        ));
    }

    None
}
