//! BattleRules - The loaded data tables, shared by every battle

use crate::affinity::FactionAffinityTable;
use crate::config::{
    default_factions, default_matchups, default_synergies, load_faction_configs,
    load_matchup_configs, load_synergy_configs, ConfigError, FactionsConfig, MatchupsConfig,
    SynergiesConfig,
};
use crate::matchup::TemperamentMatchupTable;
use crate::stat_block::StatModifierCompositor;
use crate::synergy::PartySynergyCalculator;
use std::path::Path;

/// File names expected by [`BattleRules::from_dir`]
pub const MATCHUPS_FILE: &str = "matchups.toml";
pub const FACTIONS_FILE: &str = "factions.toml";
pub const SYNERGIES_FILE: &str = "synergies.toml";

/// Immutable rule tables, built once and borrowed by the calculators
#[derive(Debug, Clone)]
pub struct BattleRules {
    matchups: TemperamentMatchupTable,
    affinity: FactionAffinityTable,
    synergies: SynergiesConfig,
}

impl BattleRules {
    /// Validate and assemble injected tables
    pub fn new(
        matchups: MatchupsConfig,
        factions: FactionsConfig,
        synergies: SynergiesConfig,
    ) -> Result<Self, ConfigError> {
        matchups.validate()?;
        factions.validate()?;
        synergies.validate()?;
        Ok(Self::assemble(matchups, factions, synergies))
    }

    fn assemble(matchups: MatchupsConfig, factions: FactionsConfig, synergies: SynergiesConfig) -> Self {
        BattleRules {
            matchups: TemperamentMatchupTable::new(matchups),
            affinity: FactionAffinityTable::new(factions, synergies.party_bonus.clone())
                .with_presence_temperament(synergies.presence_temperament),
            synergies,
        }
    }

    /// Rules from the bundled data files
    pub fn standard() -> Self {
        // The bundled tables are validated as they are parsed
        Self::assemble(default_matchups(), default_factions(), default_synergies())
    }

    /// Load `matchups.toml`, `factions.toml` and `synergies.toml` from a directory
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let matchups = load_matchup_configs(&dir.join(MATCHUPS_FILE))?;
        let factions = load_faction_configs(&dir.join(FACTIONS_FILE))?;
        let synergies = load_synergy_configs(&dir.join(SYNERGIES_FILE))?;
        tracing::debug!(dir = %dir.display(), "battle rules loaded");
        Ok(Self::assemble(matchups, factions, synergies))
    }

    pub fn matchups(&self) -> &TemperamentMatchupTable {
        &self.matchups
    }

    pub fn affinity(&self) -> &FactionAffinityTable {
        &self.affinity
    }

    pub fn synergies(&self) -> &SynergiesConfig {
        &self.synergies
    }

    pub fn synergy_calculator(&self) -> PartySynergyCalculator<'_> {
        PartySynergyCalculator::new(&self.affinity, &self.synergies)
    }

    pub fn compositor(&self) -> StatModifierCompositor {
        StatModifierCompositor::new()
    }
}

impl Default for BattleRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Faction, Temperament};

    #[test]
    fn test_standard_rules() {
        let rules = BattleRules::standard();
        let result = rules
            .matchups()
            .multiplier_for(Temperament::Brave, Temperament::Wild)
            .unwrap();
        assert!((result.multiplier - 1.2).abs() < f64::EPSILON);
        assert!((rules.affinity().bonus_for(Faction::Valhalla, Temperament::Brave).unwrap() - 0.10).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_bundled_dir() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
        let rules = BattleRules::from_dir(&dir).unwrap();
        assert_eq!(rules.synergies(), BattleRules::standard().synergies());
    }

    #[test]
    fn test_from_missing_dir() {
        let result = BattleRules::from_dir(Path::new("/nonexistent/battle_rules"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_new_validates_injected_tables() {
        let mut synergies = default_synergies();
        synergies.faction_tiers.min_count = 1;
        let result = BattleRules::new(default_matchups(), default_factions(), synergies);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let rules = BattleRules::new(default_matchups(), default_factions(), default_synergies()).unwrap();
        let solo = [crate::types::CombatantDescriptor::new(
            "a",
            Temperament::Stoic,
            Faction::Helheim,
            crate::types::Archetype::Tank,
            crate::types::CoreStats::new(1000, 100, 50, 10),
        )];
        assert!(rules.synergy_calculator().compute_synergies(&solo).unwrap().is_empty());
    }

    #[test]
    fn test_presence_temperament_shared_with_affinity() {
        let mut synergies = default_synergies();
        synergies.presence_temperament = Temperament::Cunning;
        let rules = BattleRules::new(default_matchups(), default_factions(), synergies).unwrap();
        assert_eq!(rules.affinity().presence_temperament(), Temperament::Cunning);
    }
}
