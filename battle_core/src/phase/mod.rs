//! BattlePhaseMachine - Legal sequencing of combat phases
//!
//! Transition table:
//!
//! | From            | To                                                   |
//! |-----------------|------------------------------------------------------|
//! | Initializing    | PlayerInput, Executing, BattleEnd                    |
//! | PlayerInput     | Targeting, Executing, BattleEnd                      |
//! | Targeting       | PlayerInput, Executing, BattleEnd                    |
//! | Executing       | Animating, Resolving, BattleEnd                      |
//! | Animating       | Resolving, BattleEnd                                 |
//! | Resolving       | PlayerInput, Executing, WaveTransition, BattleEnd    |
//! | WaveTransition  | PlayerInput, Executing, BattleEnd                    |
//! | BattleEnd       | (terminal)                                           |

#[cfg(any(test, feature = "diagnostics"))]
pub mod diagnostics;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// Phase of a single battle
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattlePhase {
    Initializing,
    PlayerInput,
    Targeting,
    Executing,
    Animating,
    Resolving,
    WaveTransition,
    BattleEnd,
}

impl BattlePhase {
    /// Phases reachable in one step from this one
    pub fn allowed_next(self) -> &'static [BattlePhase] {
        use BattlePhase::*;
        match self {
            Initializing => &[PlayerInput, Executing, BattleEnd],
            PlayerInput => &[Targeting, Executing, BattleEnd],
            Targeting => &[PlayerInput, Executing, BattleEnd],
            Executing => &[Animating, Resolving, BattleEnd],
            Animating => &[Resolving, BattleEnd],
            Resolving => &[PlayerInput, Executing, WaveTransition, BattleEnd],
            WaveTransition => &[PlayerInput, Executing, BattleEnd],
            BattleEnd => &[],
        }
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_next().is_empty()
    }
}

/// Phase machine error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseError {
    #[error("Invalid phase transition: {from} -> {to}")]
    InvalidTransition { from: BattlePhase, to: BattlePhase },
    #[error("Phase history is empty")]
    EmptyHistory,
    #[error("Phase history starts at {0}, expected initializing")]
    HistoryStart(BattlePhase),
    #[error("Current phase {current} does not match last history entry {last}")]
    CurrentMismatch { current: BattlePhase, last: BattlePhase },
}

/// Serialized form of a machine, validated on the way in
#[derive(Deserialize)]
struct SavedPhases {
    current: BattlePhase,
    history: Vec<BattlePhase>,
}

/// Tracks the current phase and every phase entered since the last reset
///
/// Deserializing replays the stored history through the transition table,
/// so only states reachable by legal transitions can be restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedPhases")]
pub struct BattlePhaseMachine {
    current: BattlePhase,
    history: Vec<BattlePhase>,
}

impl BattlePhaseMachine {
    pub fn new() -> Self {
        BattlePhaseMachine {
            current: BattlePhase::Initializing,
            history: vec![BattlePhase::Initializing],
        }
    }

    pub fn current(&self) -> BattlePhase {
        self.current
    }

    /// Every phase entered, oldest first. Never empty.
    pub fn history(&self) -> &[BattlePhase] {
        &self.history
    }

    pub fn is_phase(&self, phase: BattlePhase) -> bool {
        self.current == phase
    }

    pub fn is_any_phase(&self, phases: &[BattlePhase]) -> bool {
        phases.contains(&self.current)
    }

    pub fn can_transition_to(&self, phase: BattlePhase) -> bool {
        self.current.allowed_next().contains(&phase)
    }

    /// Move to `phase` if the table allows it
    ///
    /// On error neither the current phase nor the history changes.
    pub fn transition_to(&mut self, phase: BattlePhase) -> Result<(), PhaseError> {
        if !self.can_transition_to(phase) {
            return Err(PhaseError::InvalidTransition {
                from: self.current,
                to: phase,
            });
        }

        tracing::debug!(from = %self.current, to = %phase, "battle phase transition");
        self.enter(phase);
        Ok(())
    }

    /// Back to `Initializing` with a fresh history
    pub fn reset(&mut self) {
        *self = BattlePhaseMachine::new();
    }

    /// Allowed successors of an arbitrary phase
    pub fn allowed_from(phase: BattlePhase) -> &'static [BattlePhase] {
        phase.allowed_next()
    }

    fn enter(&mut self, phase: BattlePhase) {
        self.current = phase;
        self.history.push(phase);
    }
}

impl TryFrom<SavedPhases> for BattlePhaseMachine {
    type Error = PhaseError;

    fn try_from(saved: SavedPhases) -> Result<Self, Self::Error> {
        let mut steps = saved.history.into_iter();
        match steps.next() {
            Some(BattlePhase::Initializing) => {}
            Some(first) => return Err(PhaseError::HistoryStart(first)),
            None => return Err(PhaseError::EmptyHistory),
        }

        let mut machine = BattlePhaseMachine::new();
        for phase in steps {
            if !machine.can_transition_to(phase) {
                return Err(PhaseError::InvalidTransition {
                    from: machine.current,
                    to: phase,
                });
            }
            machine.enter(phase);
        }

        if machine.current != saved.current {
            return Err(PhaseError::CurrentMismatch {
                current: saved.current,
                last: machine.current,
            });
        }
        Ok(machine)
    }
}

impl Default for BattlePhaseMachine {
    fn default() -> Self {
        Self::new()
    }
}
