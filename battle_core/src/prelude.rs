//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::types::{
    Archetype, CombatantDescriptor, CoreStats, Faction, PartyComposition, RosterEntry, Temperament,
};

// Rule tables
pub use crate::affinity::FactionAffinityTable;
pub use crate::matchup::{MatchupCategory, MatchupResult, TemperamentMatchupTable};
pub use crate::rules::BattleRules;

// Synergies and stats
pub use crate::source::{EffectSource, StatSource};
pub use crate::stat_block::{EffectiveStats, StatModifierCompositor};
pub use crate::synergy::{Effect, PartySynergyCalculator, SynergyRecord};

// Phases
pub use crate::phase::{BattlePhase, BattlePhaseMachine};

// Errors
pub use crate::BattleError;
