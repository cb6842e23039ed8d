//! Unchecked phase changes for debugging and tests

use super::{BattlePhase, BattlePhaseMachine};

/// Bypasses the transition table of a borrowed machine
pub struct PhaseOverride<'a> {
    machine: &'a mut BattlePhaseMachine,
}

impl<'a> PhaseOverride<'a> {
    pub fn new(machine: &'a mut BattlePhaseMachine) -> Self {
        PhaseOverride { machine }
    }

    /// Enter `phase` without validation; history still records it
    pub fn force(&mut self, phase: BattlePhase) {
        tracing::warn!(from = %self.machine.current(), to = %phase, "forced battle phase transition");
        self.machine.enter(phase);
    }
}
