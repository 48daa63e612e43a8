//! Battleground start-exploit heuristic
//!
//! Before the gates open each team is confined to its starting pen; leaving
//! it early is only possible by teleporting or clipping through the gate.
//! Reports reuse the teleport bucket and go through the forced-announcement
//! path so operators see repeat offenders even with warnings disabled.
//!
//! Some maps additionally define a Z ceiling that stays in force after the
//! start (a known item exploit parks players on top of the map geometry).

use crate::checks::{DetectionType, Previous, Violation};
use crate::config::MovementData;
use crate::movement::{MoveOpcode, MovementSample};
use crate::world::{BattlegroundStatus, Team, WorldView};

pub fn check(
    sample: &MovementSample,
    opcode: MoveOpcode,
    prev: Option<Previous<'_>>,
    world: &dyn WorldView,
    data: &MovementData,
) -> Option<Violation> {
    prev?;
    let bg = world.battleground()?;

    if bg.status == BattlegroundStatus::WaitJoin {
        if let Some(pens) = data.pens(bg.map_id) {
            let pen = match bg.team {
                Team::Alliance => pens.alliance,
                Team::Horde => pens.horde,
            };
            if !pen.contains(sample.position.x, sample.position.y) {
                return Some(Violation::new(
                    DetectionType::Teleport,
                    format!(
                        "left the starting pen before the gates opened ({:.0}, {:.0})",
                        sample.position.x, sample.position.y
                    ),
                ));
            }
        }
    }

    if let Some(ceiling) = data.high_z_ceiling(bg.map_id) {
        if sample.position.z > ceiling && opcode != MoveOpcode::Jump && !sample.flags.any_falling()
        {
            return Some(Violation::new(
                DetectionType::Teleport,
                format!("above the map ceiling at z {:.0}", sample.position.z),
            ));
        }
    }

    None
}
