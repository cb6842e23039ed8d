//! FactionAffinityTable - Per-faction temperament bonuses
//!
//! Every faction favours one temperament (primary, 10%) and optionally a
//! second one (secondary, 5%). Any other temperament gets nothing.

mod party_bonus;

pub use party_bonus::{MemberAffinity, PartyAffinityBonus};

use crate::config::{FactionEntry, FactionsConfig, PartyBonusConfig, SynergyBonus};
use crate::types::{Faction, Temperament};
use thiserror::Error;

/// Affinity lookup error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AffinityError {
    #[error("Unknown faction: {0}")]
    UnknownFaction(String),
}

/// Immutable faction table built once from configuration
#[derive(Debug, Clone)]
pub struct FactionAffinityTable {
    entries: Vec<FactionEntry>,
    primary_bonus: f64,
    secondary_bonus: f64,
    party_bonus: PartyBonusConfig,
    /// Temperament whose presence adds `party_bonus.presence_bonus`
    presence_temperament: Temperament,
}

impl FactionAffinityTable {
    pub fn new(config: FactionsConfig, party_bonus: PartyBonusConfig) -> Self {
        tracing::debug!(factions = config.factions.len(), "faction table loaded");
        FactionAffinityTable {
            entries: config.factions,
            primary_bonus: config.primary_bonus,
            secondary_bonus: config.secondary_bonus,
            party_bonus,
            presence_temperament: crate::config::default_presence_temperament(),
        }
    }

    /// Use the synergy tables' presence temperament for the party bonus
    pub fn with_presence_temperament(mut self, temperament: Temperament) -> Self {
        self.presence_temperament = temperament;
        self
    }

    /// Table built from the bundled `factions.toml` and `synergies.toml`
    pub fn with_defaults() -> Self {
        let synergies = crate::config::default_synergies();
        Self::new(crate::config::default_factions(), synergies.party_bonus)
            .with_presence_temperament(synergies.presence_temperament)
    }

    fn entry(&self, faction: Faction) -> Result<&FactionEntry, AffinityError> {
        self.entries
            .iter()
            .find(|e| e.faction == faction)
            .ok_or_else(|| AffinityError::UnknownFaction(faction.to_string()))
    }

    /// Bonus fraction a faction grants to a temperament (0, 0.05 or 0.10 by default)
    pub fn bonus_for(&self, faction: Faction, temperament: Temperament) -> Result<f64, AffinityError> {
        let entry = self.entry(faction)?;
        if entry.primary == temperament {
            Ok(self.primary_bonus)
        } else if entry.secondary == Some(temperament) {
            Ok(self.secondary_bonus)
        } else {
            Ok(0.0)
        }
    }

    /// Parse the faction name first; unknown names are an error, unknown
    /// temperaments simply yield no bonus
    pub fn bonus_for_names(&self, faction: &str, temperament: &str) -> Result<f64, AffinityError> {
        let faction = faction
            .parse::<Faction>()
            .map_err(|_| AffinityError::UnknownFaction(faction.to_string()))?;
        match temperament.parse::<Temperament>() {
            Ok(t) => self.bonus_for(faction, t),
            Err(_) => {
                self.entry(faction)?;
                Ok(0.0)
            }
        }
    }

    /// Base stat bonus used by this faction's faction synergy
    pub fn synergy_bonus_for(&self, faction: Faction) -> Result<SynergyBonus, AffinityError> {
        Ok(self.entry(faction)?.synergy_bonus)
    }

    /// The faction's primary and secondary temperaments
    pub fn favoured(&self, faction: Faction) -> Result<(Temperament, Option<Temperament>), AffinityError> {
        let entry = self.entry(faction)?;
        Ok((entry.primary, entry.secondary))
    }

    pub(crate) fn party_bonus_config(&self) -> &PartyBonusConfig {
        &self.party_bonus
    }

    pub fn presence_temperament(&self) -> Temperament {
        self.presence_temperament
    }
}

impl Default for FactionAffinityTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_faction_configs;

    #[test]
    fn test_primary_and_secondary() {
        let table = FactionAffinityTable::with_defaults();
        let primary = table.bonus_for(Faction::Valhalla, Temperament::Brave).unwrap();
        let secondary = table.bonus_for(Faction::Valhalla, Temperament::Fierce).unwrap();
        let none = table.bonus_for(Faction::Valhalla, Temperament::Calm).unwrap();

        assert!((primary - 0.10).abs() < f64::EPSILON);
        assert!((secondary - 0.05).abs() < f64::EPSILON);
        assert!(none.abs() < f64::EPSILON);
    }

    #[test]
    fn test_every_faction_has_a_primary() {
        let table = FactionAffinityTable::with_defaults();
        for faction in Faction::all() {
            let (primary, secondary) = table.favoured(faction).unwrap();
            assert!((table.bonus_for(faction, primary).unwrap() - 0.10).abs() < f64::EPSILON);
            assert!(secondary.is_some());
        }
    }

    #[test]
    fn test_unknown_faction_name() {
        let table = FactionAffinityTable::with_defaults();
        assert_eq!(
            table.bonus_for_names("atlantis", "brave"),
            Err(AffinityError::UnknownFaction("atlantis".to_string()))
        );
        // An unmatched temperament is not an error
        assert_eq!(table.bonus_for_names("olympus", "sleepy"), Ok(0.0));
        assert_eq!(table.bonus_for_names("Olympus", "CUNNING"), Ok(0.10));
    }

    #[test]
    fn test_missing_faction_row() {
        let config = parse_faction_configs(
            r#"
[[factions]]
faction = "yomi"
primary = "wild"
"#,
        )
        .unwrap();
        let table = FactionAffinityTable::new(config, PartyBonusConfig::default());

        assert_eq!(table.bonus_for(Faction::Yomi, Temperament::Fierce), Ok(0.0));
        assert_eq!(
            table.bonus_for(Faction::Kunlun, Temperament::Devoted),
            Err(AffinityError::UnknownFaction("kunlun".to_string()))
        );
        assert!(table.synergy_bonus_for(Faction::Kunlun).is_err());
    }
}
