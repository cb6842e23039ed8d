//! Faction affinity configuration

use super::ConfigError;
use crate::types::{Faction, Temperament};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base stat bonus a faction contributes to its faction synergy (fractions)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynergyBonus {
    #[serde(default = "default_synergy_atk")]
    pub atk: f64,
    #[serde(default = "default_synergy_def")]
    pub def: f64,
    #[serde(default)]
    pub hp: f64,
    #[serde(default)]
    pub spd: f64,
}

impl Default for SynergyBonus {
    fn default() -> Self {
        SynergyBonus {
            atk: default_synergy_atk(),
            def: default_synergy_def(),
            hp: 0.0,
            spd: 0.0,
        }
    }
}

fn default_synergy_atk() -> f64 {
    0.10
}
fn default_synergy_def() -> f64 {
    0.05
}

/// One faction row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionEntry {
    pub faction: Faction,
    /// Temperament receiving the primary bonus
    pub primary: Temperament,
    /// Temperament receiving the secondary bonus
    #[serde(default)]
    pub secondary: Option<Temperament>,
    #[serde(default)]
    pub synergy_bonus: SynergyBonus,
}

/// Faction table as stored in `factions.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactionsConfig {
    #[serde(default = "default_primary_bonus")]
    pub primary_bonus: f64,
    #[serde(default = "default_secondary_bonus")]
    pub secondary_bonus: f64,
    pub factions: Vec<FactionEntry>,
}

fn default_primary_bonus() -> f64 {
    0.10
}
fn default_secondary_bonus() -> f64 {
    0.05
}

impl FactionsConfig {
    /// Reject duplicate faction rows
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, entry) in self.factions.iter().enumerate() {
            if self.factions[..i].iter().any(|e| e.faction == entry.faction) {
                return Err(ConfigError::ValidationError(format!(
                    "faction '{}' is listed more than once",
                    entry.faction
                )));
            }
            if entry.secondary == Some(entry.primary) {
                return Err(ConfigError::ValidationError(format!(
                    "faction '{}' uses '{}' as both primary and secondary temperament",
                    entry.faction, entry.primary
                )));
            }
        }
        Ok(())
    }
}

/// Load faction configuration from a TOML file
pub fn load_faction_configs(path: &Path) -> Result<FactionsConfig, ConfigError> {
    let config: FactionsConfig = super::load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Load faction configuration from a TOML string
pub fn parse_faction_configs(content: &str) -> Result<FactionsConfig, ConfigError> {
    let config: FactionsConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// Get the default faction table
pub fn default_factions() -> FactionsConfig {
    let toml = include_str!("../../config/factions.toml");
    parse_faction_configs(toml).unwrap_or_else(|_| builtin_factions())
}

fn builtin_factions() -> FactionsConfig {
    use Faction::*;
    use Temperament::*;

    let entry = |faction, primary, secondary| FactionEntry {
        faction,
        primary,
        secondary: Some(secondary),
        synergy_bonus: SynergyBonus::default(),
    };

    FactionsConfig {
        primary_bonus: default_primary_bonus(),
        secondary_bonus: default_secondary_bonus(),
        factions: vec![
            entry(Valhalla, Brave, Fierce),
            entry(Takamagahara, Mystic, Devoted),
            entry(Olympus, Cunning, Noble),
            entry(Asgard, Calm, Stoic),
            entry(Yomi, Wild, Fierce),
            entry(Tartarus, Fierce, Wild),
            entry(Avalon, Noble, Devoted),
            entry(Helheim, Stoic, Cunning),
            entry(Kunlun, Devoted, Noble),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_factions() {
        let toml = r#"
[[factions]]
faction = "valhalla"
primary = "brave"
secondary = "fierce"

[factions.synergy_bonus]
atk = 0.12
hp = 0.05
"#;

        let config = parse_faction_configs(toml).unwrap();
        let valhalla = &config.factions[0];
        assert_eq!(valhalla.primary, Temperament::Brave);
        assert!((valhalla.synergy_bonus.atk - 0.12).abs() < f64::EPSILON);
        assert!((valhalla.synergy_bonus.def - 0.05).abs() < f64::EPSILON);
        assert!((valhalla.synergy_bonus.hp - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_primary_and_secondary_rejected() {
        let toml = r#"
[[factions]]
faction = "yomi"
primary = "wild"
secondary = "wild"
"#;
        assert!(parse_faction_configs(toml).is_err());
    }

    #[test]
    fn test_default_factions_loads_all() {
        let config = default_factions();
        assert_eq!(config.factions.len(), 9);
        assert_eq!(config.factions, builtin_factions().factions);
    }
}
