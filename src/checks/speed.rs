//! Speed heuristic
//!
//! Compares the effective client speed (2D distance over client-reported
//! elapsed time) against the server-authoritative cap for the current
//! movement mode. A client timestamp running backward is itself a violation;
//! an honest client's clock only ever wraps forward.

use crate::checks::{DetectionType, Previous, Violation};
use crate::config::MovementData;
use crate::constants::SPEED_TOLERANCE;
use crate::movement::{MovementFlags, MovementSample};
use crate::world::{MovementMode, WorldView};

fn movement_mode(flags: MovementFlags) -> MovementMode {
    if flags.contains(MovementFlags::SWIMMING) {
        MovementMode::Swim
    } else if flags.any_flying() {
        MovementMode::Flight
    } else if flags.contains(MovementFlags::WALKING) {
        MovementMode::Walk
    } else {
        MovementMode::Run
    }
}

pub fn check(
    sample: &MovementSample,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
    data: &MovementData,
) -> Option<Violation> {
    let prev = prev?;

    let distance = sample.position.distance_2d(&prev.sample.position);
    if distance == 0.0 {
        return None;
    }

    // Scripted transports move the player faster than any legitimate cap.
    if sample.flags.contains(MovementFlags::ON_TRANSPORT) && data.is_transport_map(world.map_id())
    {
        return None;
    }
    // Falling and sliding off slopes produces legitimate speed spikes.
    if prev.sample.flags.any_falling() {
        return None;
    }
    if world.has_teleport_allowance() {
        return None;
    }

    let elapsed_ms = match sample.elapsed_since(prev.sample) {
        Some(ms) => ms,
        None => {
            return Some(Violation::new(
                DetectionType::Speed,
                format!(
                    "client timestamp ran backward ({} -> {})",
                    prev.sample.client_ms, sample.client_ms
                ),
            ));
        }
    };

    let mode = movement_mode(sample.flags);
    let cap = world.speed_cap(mode);
    let speed = distance / (elapsed_ms as f32 / 1000.0);

    if speed > cap * SPEED_TOLERANCE {
        return Some(Violation::new(
            DetectionType::Speed,
            format!("moved at {:.1} units/s (cap {:.1}, mode {:?})", speed, cap, mode),
        ));
    }

    None
}
