//! Temperament matchup configuration

use super::ConfigError;
use crate::types::Temperament;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Advantage/disadvantage row for one attacking temperament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupRow {
    pub temperament: Temperament,
    /// Defenders this temperament is strong against
    pub advantage: Vec<Temperament>,
    /// Defenders this temperament is weak against
    pub disadvantage: Vec<Temperament>,
}

/// Matchup table as stored in `matchups.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupsConfig {
    #[serde(default = "default_advantage_multiplier")]
    pub advantage_multiplier: f64,
    #[serde(default = "default_disadvantage_multiplier")]
    pub disadvantage_multiplier: f64,
    #[serde(default = "default_neutral_multiplier")]
    pub neutral_multiplier: f64,
    pub matchups: Vec<MatchupRow>,
}

fn default_advantage_multiplier() -> f64 {
    1.20
}
fn default_disadvantage_multiplier() -> f64 {
    0.80
}
fn default_neutral_multiplier() -> f64 {
    1.00
}

impl MatchupsConfig {
    /// Reject rows that would make lookups ambiguous
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, row) in self.matchups.iter().enumerate() {
            if self.matchups[..i].iter().any(|r| r.temperament == row.temperament) {
                return Err(ConfigError::ValidationError(format!(
                    "temperament '{}' has more than one matchup row",
                    row.temperament
                )));
            }
        }
        if self.advantage_multiplier <= 0.0 || self.disadvantage_multiplier <= 0.0 {
            return Err(ConfigError::ValidationError(
                "matchup multipliers must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load matchup configuration from a TOML file
pub fn load_matchup_configs(path: &Path) -> Result<MatchupsConfig, ConfigError> {
    let config: MatchupsConfig = super::load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Load matchup configuration from a TOML string
pub fn parse_matchup_configs(content: &str) -> Result<MatchupsConfig, ConfigError> {
    let config: MatchupsConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// Get the default matchup table
pub fn default_matchups() -> MatchupsConfig {
    let toml = include_str!("../../config/matchups.toml");
    parse_matchup_configs(toml).unwrap_or_else(|_| builtin_matchups())
}

/// Compiled-in copy of the standard matrix (each temperament: 2 strong, 2 weak)
fn builtin_matchups() -> MatchupsConfig {
    use Temperament::*;

    let row = |temperament, advantage: [Temperament; 2], disadvantage: [Temperament; 2]| MatchupRow {
        temperament,
        advantage: advantage.to_vec(),
        disadvantage: disadvantage.to_vec(),
    };

    MatchupsConfig {
        advantage_multiplier: default_advantage_multiplier(),
        disadvantage_multiplier: default_disadvantage_multiplier(),
        neutral_multiplier: default_neutral_multiplier(),
        matchups: vec![
            row(Brave, [Wild, Cunning], [Fierce, Devoted]),
            row(Fierce, [Brave, Noble], [Wild, Calm]),
            row(Wild, [Fierce, Mystic], [Brave, Stoic]),
            row(Calm, [Devoted, Fierce], [Stoic, Cunning]),
            row(Stoic, [Calm, Wild], [Devoted, Mystic]),
            row(Devoted, [Stoic, Brave], [Calm, Noble]),
            row(Cunning, [Mystic, Calm], [Noble, Brave]),
            row(Noble, [Cunning, Devoted], [Mystic, Fierce]),
            row(Mystic, [Noble, Stoic], [Cunning, Wild]),
        ],
    }
}
