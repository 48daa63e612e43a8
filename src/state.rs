//! Per-player movement tracking state
//!
//! One record per online player, created on login and destroyed on logout.
//! The last accepted sample is replaced wholesale on every dispatch; the
//! heuristics always compare against the pre-dispatch value.

use crate::checks::Previous;
use crate::movement::{MoveOpcode, MovementSample};
use crate::report::ReportLedger;

#[derive(Debug, Default)]
pub struct PlayerMovementState {
    last_sample: Option<MovementSample>,
    last_opcode: MoveOpcode,
    pub reports: ReportLedger,
}

impl PlayerMovementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The previously accepted sample paired with its opcode, if any packet
    /// has been accepted yet.
    pub fn previous(&self) -> Option<Previous<'_>> {
        self.last_sample
            .as_ref()
            .map(|sample| Previous { sample, opcode: self.last_opcode })
    }

    pub fn last_sample(&self) -> Option<&MovementSample> {
        self.last_sample.as_ref()
    }

    pub fn last_opcode(&self) -> MoveOpcode {
        self.last_opcode
    }

    /// Accept the sample as the new comparison baseline.
    pub fn commit(&mut self, sample: MovementSample, opcode: MoveOpcode) {
        self.last_sample = Some(sample);
        self.last_opcode = opcode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_at;

    #[test]
    fn fresh_state_has_no_previous() {
        let state = PlayerMovementState::new();
        assert!(state.previous().is_none());
    }

    #[test]
    fn commit_replaces_the_baseline() {
        let mut state = PlayerMovementState::new();
        state.commit(sample_at(1.0, 2.0, 3.0), MoveOpcode::Jump);
        let prev = state.previous().unwrap();
        assert_eq!(prev.sample.position.x, 1.0);
        assert_eq!(prev.opcode, MoveOpcode::Jump);

        state.commit(sample_at(4.0, 5.0, 6.0), MoveOpcode::Heartbeat);
        let prev = state.previous().unwrap();
        assert_eq!(prev.sample.position.x, 4.0);
        assert_eq!(prev.opcode, MoveOpcode::Heartbeat);
    }
}
