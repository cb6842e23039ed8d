//! TemperamentMatchupTable - Directed advantage relation between temperaments
//!
//! Each attacking temperament lists the defenders it is strong against and
//! the defenders it is weak against. The relation is stored exactly as
//! configured and is not assumed to be symmetric: "A beats B" says nothing
//! about the B → A row.
//!
//! - Same temperament: neutral
//! - Defender in the attacker's advantage set: `advantage_multiplier` (1.20)
//! - Defender in the attacker's disadvantage set: `disadvantage_multiplier` (0.80)
//! - Anything else: neutral (1.00)

mod chart;
mod consistency;

pub use chart::{CounterEntry, CounterReport, MatchupChart};
pub use consistency::MatchupIssue;

use crate::config::{MatchupRow, MatchupsConfig};
use crate::types::Temperament;
use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

/// Matchup lookup error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchupError {
    #[error("Unknown temperament: {0}")]
    UnknownTemperament(String),
}

/// How an attacker fares against a defender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchupCategory {
    Advantage,
    Neutral,
    Disadvantage,
}

/// Result of a matchup lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupResult {
    /// Damage multiplier to apply to the attacker's hit
    pub multiplier: f64,
    pub category: MatchupCategory,
    /// Human readable explanation
    pub description: String,
}

/// Immutable matchup table built once from configuration
#[derive(Debug, Clone)]
pub struct TemperamentMatchupTable {
    rows: Vec<MatchupRow>,
    advantage_multiplier: f64,
    disadvantage_multiplier: f64,
    neutral_multiplier: f64,
}

impl TemperamentMatchupTable {
    /// Build a table from configuration
    ///
    /// Runs the consistency check and logs every issue found. Issues are
    /// reported, not rejected.
    pub fn new(config: MatchupsConfig) -> Self {
        let table = TemperamentMatchupTable {
            rows: config.matchups,
            advantage_multiplier: config.advantage_multiplier,
            disadvantage_multiplier: config.disadvantage_multiplier,
            neutral_multiplier: config.neutral_multiplier,
        };

        let issues = table.check_consistency();
        for issue in &issues {
            tracing::warn!(%issue, "matchup table inconsistency");
        }
        tracing::debug!(
            rows = table.rows.len(),
            issues = issues.len(),
            "matchup table loaded"
        );

        table
    }

    /// Table built from the bundled `matchups.toml`
    pub fn with_defaults() -> Self {
        Self::new(crate::config::default_matchups())
    }

    fn row(&self, temperament: Temperament) -> Result<&MatchupRow, MatchupError> {
        self.rows
            .iter()
            .find(|r| r.temperament == temperament)
            .ok_or_else(|| MatchupError::UnknownTemperament(temperament.to_string()))
    }

    /// Look up the multiplier for an attacker hitting a defender
    pub fn multiplier_for(
        &self,
        attacker: Temperament,
        defender: Temperament,
    ) -> Result<MatchupResult, MatchupError> {
        let row = self.row(attacker)?;
        // The defender must be known too, even though only the attacker's row is read
        self.row(defender)?;

        if attacker == defender {
            return Ok(MatchupResult {
                multiplier: self.neutral_multiplier,
                category: MatchupCategory::Neutral,
                description: format!("{} vs {} - same temperament, no effect", attacker, defender),
            });
        }

        if row.advantage.contains(&defender) {
            return Ok(MatchupResult {
                multiplier: self.advantage_multiplier,
                category: MatchupCategory::Advantage,
                description: format!(
                    "{} is strong against {} ({:+.0}%)",
                    attacker,
                    defender,
                    (self.advantage_multiplier - 1.0) * 100.0
                ),
            });
        }

        if row.disadvantage.contains(&defender) {
            return Ok(MatchupResult {
                multiplier: self.disadvantage_multiplier,
                category: MatchupCategory::Disadvantage,
                description: format!(
                    "{} is weak against {} ({:+.0}%)",
                    attacker,
                    defender,
                    (self.disadvantage_multiplier - 1.0) * 100.0
                ),
            });
        }

        Ok(MatchupResult {
            multiplier: self.neutral_multiplier,
            category: MatchupCategory::Neutral,
            description: format!("{} vs {} - no effect", attacker, defender),
        })
    }

    /// Parse both temperament names, then look up the matchup
    pub fn multiplier_for_names(
        &self,
        attacker: &str,
        defender: &str,
    ) -> Result<MatchupResult, MatchupError> {
        let parse = |name: &str| {
            name.parse::<Temperament>()
                .map_err(|_| MatchupError::UnknownTemperament(name.to_string()))
        };
        self.multiplier_for(parse(attacker)?, parse(defender)?)
    }

    /// Scale a raw damage value by the matchup multiplier
    pub fn scale_damage(
        &self,
        damage: f64,
        attacker: Temperament,
        defender: Temperament,
    ) -> Result<f64, MatchupError> {
        Ok(damage * self.multiplier_for(attacker, defender)?.multiplier)
    }

    /// Defenders this temperament is strong against
    pub fn advantages_of(&self, temperament: Temperament) -> Result<&[Temperament], MatchupError> {
        Ok(&self.row(temperament)?.advantage)
    }

    /// Defenders this temperament is weak against
    pub fn disadvantages_of(
        &self,
        temperament: Temperament,
    ) -> Result<&[Temperament], MatchupError> {
        Ok(&self.row(temperament)?.disadvantage)
    }

    /// Temperaments with a row, in declaration order
    pub fn temperaments(&self) -> impl Iterator<Item = Temperament> + '_ {
        self.rows.iter().map(|r| r.temperament)
    }

    pub fn advantage_multiplier(&self) -> f64 {
        self.advantage_multiplier
    }

    pub fn disadvantage_multiplier(&self) -> f64 {
        self.disadvantage_multiplier
    }

    pub fn neutral_multiplier(&self) -> f64 {
        self.neutral_multiplier
    }
}

impl Default for TemperamentMatchupTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}
