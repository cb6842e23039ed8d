//! Configuration loading from TOML (or JSON) data tables

mod factions;
mod matchups;
mod synergies;

pub use factions::{
    default_factions, load_faction_configs, parse_faction_configs, FactionEntry, FactionsConfig, SynergyBonus,
};
pub use matchups::{
    default_matchups, load_matchup_configs, parse_matchup_configs, MatchupRow, MatchupsConfig,
};
pub use synergies::{
    default_synergies, load_synergy_configs, parse_synergy_configs, ArchetypeSynergyConfig, FactionTierConfig,
    PairCombo, PartyBonusConfig, SpecialCombo, SynergiesConfig, TemperamentEffects,
};

pub(crate) use synergies::default_presence_temperament;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON string and deserialize it (data dumps exported by the content tools)
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = serde_json::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_is_reported() {
        let result: Result<MatchupsConfig, _> = parse_toml("matchups = 3");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result: Result<MatchupsConfig, _> = load_toml(Path::new("/nonexistent/matchups.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_parse_json_factions() {
        let json = r#"{
            "factions": [
                { "faction": "yomi", "primary": "wild", "secondary": "fierce" }
            ]
        }"#;
        let config: FactionsConfig = parse_json(json).unwrap();
        assert_eq!(config.factions.len(), 1);
        assert!((config.primary_bonus - 0.10).abs() < f64::EPSILON);
    }
}
