//! Control-state heuristics: rooted movement, missing gravity, ignored
//! knockbacks.

use crate::checks::{DetectionType, Previous, Violation};
use crate::constants::{GRAVITY_FALL_SPEED_EPSILON, IGNORE_CONTROL_LATENCY_CAP_MS};
use crate::movement::{MoveOpcode, MovementFlags, MovementSample};
use crate::world::{AuraKind, WorldView};

/// A rooted player with a healthy connection should be provably stationary;
/// any horizontal drift means the client ignored the loss of control.
pub fn ignore_control(
    sample: &MovementSample,
    opcode: MoveOpcode,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
) -> Option<Violation> {
    let prev = prev?;

    if !world.has_aura(AuraKind::Root)
        || world.on_vehicle()
        || world.latency_ms() >= IGNORE_CONTROL_LATENCY_CAP_MS
    {
        return None;
    }

    // Landing, falling and swimming drift is momentum, not input.
    if opcode == MoveOpcode::FallLand {
        return None;
    }
    if sample.flags.any_falling() || sample.flags.contains(MovementFlags::SWIMMING) {
        return None;
    }
    if prev.opcode == MoveOpcode::Jump {
        return None;
    }

    if !sample.position.same_xy(&prev.sample.position) {
        return Some(Violation::new(
            DetectionType::IgnoreControl,
            "moved while rooted",
        ));
    }

    None
}

/// Right after a jump the player must be decelerating under gravity unless
/// something explicitly suspends it.
pub fn gravity(
    sample: &MovementSample,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
) -> Option<Violation> {
    let prev = prev?;

    if prev.opcode != MoveOpcode::Jump {
        return None;
    }
    if world.has_aura(AuraKind::FeatherFall) {
        return None;
    }
    if sample.flags.contains(MovementFlags::DISABLE_GRAVITY) {
        return None;
    }
    if sample.fall_speed >= GRAVITY_FALL_SPEED_EPSILON {
        return None;
    }

    Some(Violation::new(DetectionType::Gravity, "jumped but never fell"))
}

/// While a knockback allowance is pending the next packet must show
/// displacement; a bit-identical position means the client swallowed the
/// knockback. A moved position consumes the one-shot allowance.
pub fn anti_knockback(
    sample: &MovementSample,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
) -> Option<Violation> {
    let prev = prev?;

    if !world.has_knockback_allowance() || world.is_rooted() {
        return None;
    }

    if sample.position == prev.sample.position {
        return Some(Violation::new(
            DetectionType::AntiKnockBack,
            "position unchanged through a knockback",
        ));
    }

    world.consume_knockback_allowance();
    None
}
