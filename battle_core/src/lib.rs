//! battle_core - Deterministic combat rules for a party-based collector RPG
//!
//! This library provides:
//! - TemperamentMatchupTable: Damage multipliers between temperaments
//! - FactionAffinityTable: Faction/temperament bonuses and party affinity
//! - PartySynergyCalculator: Bonuses unlocked by party composition
//! - StatModifierCompositor: Synergy effects applied to base stats
//! - BattlePhaseMachine: Legal sequencing of combat phases
//!
//! Tables are loaded once into [`BattleRules`] and borrowed by the calculators.

pub mod affinity;
pub mod config;
pub mod matchup;
pub mod phase;
pub mod prelude;
pub mod rules;
pub mod source;
pub mod stat_block;
pub mod synergy;
pub mod types;

use thiserror::Error;

// Re-export core types for convenience
pub use affinity::{AffinityError, FactionAffinityTable, PartyAffinityBonus};
pub use config::ConfigError;
pub use matchup::{MatchupCategory, MatchupError, MatchupResult, TemperamentMatchupTable};
pub use phase::{BattlePhase, BattlePhaseMachine, PhaseError};
pub use rules::BattleRules;
pub use source::{EffectSource, StatSource};
pub use stat_block::{BonusBag, EffectiveStats, StatModifierCompositor};
pub use synergy::{Effect, PartySynergyCalculator, SynergyError, SynergyKind, SynergyPreview, SynergyRecord};
pub use types::{
    Archetype, CombatantDescriptor, CoreStats, Faction, PartyComposition, PartyError, RosterEntry,
    RosterError, Temperament,
};

/// Any error the engine can report
#[derive(Error, Debug)]
pub enum BattleError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Party(#[from] PartyError),
    #[error(transparent)]
    Matchup(#[from] MatchupError),
    #[error(transparent)]
    Affinity(#[from] AffinityError),
    #[error(transparent)]
    Synergy(#[from] SynergyError),
    #[error(transparent)]
    Phase(#[from] PhaseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
