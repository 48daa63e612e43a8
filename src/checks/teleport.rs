//! Teleport heuristic
//!
//! A displacement too large for one packet interval is either a legitimate
//! server-side teleport — which grants a one-shot allowance beforehand — or a
//! hack. The allowance is consumed on the first suspicious jump either way,
//! so it can never be replayed.

use crate::checks::{DetectionType, Previous, Violation};
use crate::constants::{TELEPORT_XY_THRESHOLD, TELEPORT_Z_THRESHOLD};
use crate::enforcement::{Enforcement, Notice};
use crate::engine::PlayerGuid;
use crate::movement::MovementSample;
use crate::world::WorldView;

pub fn check(
    guid: PlayerGuid,
    sample: &MovementSample,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
    enforcement: &dyn Enforcement,
) -> Option<Violation> {
    let prev = prev?;

    // Cheap pre-filter: in-place packets share the exact X.
    if sample.position.x == prev.sample.position.x {
        return None;
    }

    let dx = (sample.position.x - prev.sample.position.x).abs();
    let dy = (sample.position.y - prev.sample.position.y).abs();
    let dz = (sample.position.z - prev.sample.position.z).abs();

    let vertical_jump = dz > TELEPORT_Z_THRESHOLD
        && !sample.flags.any_flying()
        && !sample.flags.any_falling();
    let suspicious =
        dx > TELEPORT_XY_THRESHOLD || dy > TELEPORT_XY_THRESHOLD || vertical_jump;
    if !suspicious {
        return None;
    }

    if world.has_teleport_allowance() {
        // The legitimate teleport path consumes its one-shot permission here.
        world.revoke_teleport_allowance();
        return None;
    }

    if let Some(opponent) = world.duel_opponent() {
        enforcement.notify(Notice::DuelTeleportWarning { player: guid, opponent });
    }
    world.revoke_teleport_allowance();

    Some(Violation::new(
        DetectionType::Teleport,
        format!("displaced dx {:.1} dy {:.1} dz {:.1} in one packet", dx, dy, dz),
    ))
}
