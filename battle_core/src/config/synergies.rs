//! Synergy data tables: faction tiers, temperament effects, archetype bonuses,
//! special combos and party-wide affinity bonuses

use super::ConfigError;
use crate::synergy::Effect;
use crate::types::{Archetype, Temperament};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extra percent points a faction synergy gains at 3 and 4 members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionTierConfig {
    /// Minimum members of one faction to trigger anything
    #[serde(default = "default_faction_min_count")]
    pub min_count: usize,
    #[serde(default = "default_faction_trio")]
    pub trio: Effect,
    #[serde(default = "default_faction_full")]
    pub full: Effect,
}

impl Default for FactionTierConfig {
    fn default() -> Self {
        FactionTierConfig {
            min_count: default_faction_min_count(),
            trio: default_faction_trio(),
            full: default_faction_full(),
        }
    }
}

fn default_faction_min_count() -> usize {
    2
}
fn default_faction_trio() -> Effect {
    Effect::new().with_atk(8.0).with_def(5.0)
}
fn default_faction_full() -> Effect {
    Effect::new()
        .with_atk(15.0)
        .with_def(10.0)
        .with_hp(10.0)
        .with_spd(5.0)
}

/// Effects for one temperament at 2, 3 and 4 members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperamentEffects {
    pub temperament: Temperament,
    #[serde(default)]
    pub pair: Effect,
    #[serde(default)]
    pub trio: Effect,
    #[serde(default)]
    pub full: Effect,
}

impl TemperamentEffects {
    /// Effect for a member count; counts above 4 use the full tier
    pub fn for_count(&self, count: usize) -> Effect {
        match count {
            0 | 1 => Effect::default(),
            2 => self.pair,
            3 => self.trio,
            _ => self.full,
        }
    }
}

/// Role-balance synergy thresholds and effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeSynergyConfig {
    #[serde(default = "default_balanced_team")]
    pub balanced_team: Effect,
    #[serde(default = "default_role_threshold")]
    pub full_offense_min: usize,
    #[serde(default = "default_full_offense")]
    pub full_offense: Effect,
    #[serde(default = "default_role_threshold")]
    pub turtle_formation_min: usize,
    /// Archetypes counted toward turtle formation
    #[serde(default = "default_turtle_archetypes")]
    pub turtle_formation_archetypes: Vec<Archetype>,
    #[serde(default = "default_turtle_formation")]
    pub turtle_formation: Effect,
}

impl Default for ArchetypeSynergyConfig {
    fn default() -> Self {
        ArchetypeSynergyConfig {
            balanced_team: default_balanced_team(),
            full_offense_min: default_role_threshold(),
            full_offense: default_full_offense(),
            turtle_formation_min: default_role_threshold(),
            turtle_formation_archetypes: default_turtle_archetypes(),
            turtle_formation: default_turtle_formation(),
        }
    }
}

fn default_balanced_team() -> Effect {
    Effect::new().with_all(8.0)
}
fn default_role_threshold() -> usize {
    3
}
fn default_full_offense() -> Effect {
    Effect::new().with_atk(20.0).with_crit_rate(10.0)
}
fn default_turtle_archetypes() -> Vec<Archetype> {
    vec![
        Archetype::Warrior,
        Archetype::Tank,
        Archetype::Healer,
        Archetype::Unclassified,
    ]
}
fn default_turtle_formation() -> Effect {
    Effect::new().with_def(20.0).with_hp(15.0)
}

/// Fixed-member combo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialCombo {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Combatant ids that must all be present
    pub required: Vec<String>,
    #[serde(default)]
    pub effect: Effect,
}

/// Pair of temperaments that grants a party-wide affinity bonus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairCombo {
    pub temperaments: [Temperament; 2],
    pub bonus: f64,
}

/// Party-wide affinity bonus tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyBonusConfig {
    /// (distinct temperament count, bonus), checked from the highest count down
    #[serde(default = "default_diversity_tiers")]
    pub diversity_tiers: Vec<(usize, f64)>,
    #[serde(default = "default_pair_combos")]
    pub pair_combos: Vec<PairCombo>,
    #[serde(default = "default_presence_bonus")]
    pub presence_bonus: f64,
}

impl Default for PartyBonusConfig {
    fn default() -> Self {
        PartyBonusConfig {
            diversity_tiers: default_diversity_tiers(),
            pair_combos: default_pair_combos(),
            presence_bonus: default_presence_bonus(),
        }
    }
}

fn default_diversity_tiers() -> Vec<(usize, f64)> {
    vec![(4, 0.15), (3, 0.08), (2, 0.03)]
}
fn default_pair_combos() -> Vec<PairCombo> {
    use Temperament::*;
    [(Brave, Wild), (Calm, Devoted), (Cunning, Noble), (Fierce, Stoic)]
        .into_iter()
        .map(|(a, b)| PairCombo {
            temperaments: [a, b],
            bonus: 0.05,
        })
        .collect()
}
fn default_presence_bonus() -> f64 {
    0.03
}

/// Synergy data as stored in `synergies.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergiesConfig {
    #[serde(default)]
    pub faction_tiers: FactionTierConfig,
    #[serde(default)]
    pub temperament_effects: Vec<TemperamentEffects>,
    #[serde(default = "default_balance_min_distinct")]
    pub balance_min_distinct: usize,
    #[serde(default = "default_balance_effect")]
    pub balance_effect: Effect,
    /// Temperament whose mere presence grants `presence_effect`
    #[serde(default = "default_presence_temperament")]
    pub presence_temperament: Temperament,
    #[serde(default = "default_presence_effect")]
    pub presence_effect: Effect,
    #[serde(default)]
    pub archetype: ArchetypeSynergyConfig,
    #[serde(default)]
    pub special_combos: Vec<SpecialCombo>,
    #[serde(default)]
    pub party_bonus: PartyBonusConfig,
}

fn default_balance_min_distinct() -> usize {
    3
}
fn default_balance_effect() -> Effect {
    Effect::new().with_all(5.0)
}
pub(crate) fn default_presence_temperament() -> Temperament {
    Temperament::Mystic
}
fn default_presence_effect() -> Effect {
    Effect::new().with_skill_dmg(10.0)
}

impl Default for SynergiesConfig {
    fn default() -> Self {
        SynergiesConfig {
            faction_tiers: FactionTierConfig::default(),
            temperament_effects: Vec::new(),
            balance_min_distinct: default_balance_min_distinct(),
            balance_effect: default_balance_effect(),
            presence_temperament: default_presence_temperament(),
            presence_effect: default_presence_effect(),
            archetype: ArchetypeSynergyConfig::default(),
            special_combos: Vec::new(),
            party_bonus: PartyBonusConfig::default(),
        }
    }
}

impl SynergiesConfig {
    /// Look up the effect table for a temperament
    pub fn temperament_effects(&self, temperament: Temperament) -> Option<&TemperamentEffects> {
        self.temperament_effects
            .iter()
            .find(|e| e.temperament == temperament)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.faction_tiers.min_count < crate::synergy::MIN_FACTION_MEMBERS {
            return Err(ConfigError::ValidationError(
                "faction synergy needs a minimum of at least 2 members".to_string(),
            ));
        }
        for (i, combo) in self.special_combos.iter().enumerate() {
            if combo.required.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "special combo '{}' has no required combatants",
                    combo.id
                )));
            }
            if self.special_combos[..i].iter().any(|c| c.id == combo.id) {
                return Err(ConfigError::ValidationError(format!(
                    "special combo '{}' is declared twice",
                    combo.id
                )));
            }
        }
        for (i, entry) in self.temperament_effects.iter().enumerate() {
            if self.temperament_effects[..i]
                .iter()
                .any(|e| e.temperament == entry.temperament)
            {
                return Err(ConfigError::ValidationError(format!(
                    "temperament '{}' has more than one effect table",
                    entry.temperament
                )));
            }
        }
        Ok(())
    }
}

/// Load synergy configuration from a TOML file
pub fn load_synergy_configs(path: &Path) -> Result<SynergiesConfig, ConfigError> {
    let config: SynergiesConfig = super::load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Load synergy configuration from a TOML string
pub fn parse_synergy_configs(content: &str) -> Result<SynergiesConfig, ConfigError> {
    let config: SynergiesConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// Get the default synergy tables
pub fn default_synergies() -> SynergiesConfig {
    let toml = include_str!("../../config/synergies.toml");
    parse_synergy_configs(toml).unwrap_or_else(|_| builtin_synergies())
}

/// Compiled-in copy of the standard synergy tables
fn builtin_synergies() -> SynergiesConfig {
    use Temperament::*;

    let aux = |effect: Effect, set: fn(&mut Effect)| {
        let mut effect = effect;
        set(&mut effect);
        effect
    };
    let tiers = |temperament, pair, trio, full| TemperamentEffects {
        temperament,
        pair,
        trio,
        full,
    };
    let combo = |id: &str, name: &str, required: &[&str], effect| SpecialCombo {
        id: id.to_string(),
        name: name.to_string(),
        required: required.iter().map(|r| r.to_string()).collect(),
        effect,
    };

    SynergiesConfig {
        temperament_effects: vec![
            tiers(
                Brave,
                Effect::new().with_atk(8.0),
                Effect::new().with_atk(15.0).with_spd(5.0),
                aux(Effect::new().with_atk(25.0).with_spd(10.0), |e| e.lifesteal = 5.0),
            ),
            tiers(
                Calm,
                Effect::new().with_def(8.0).with_hp(5.0),
                Effect::new().with_def(15.0).with_hp(10.0),
                aux(Effect::new().with_def(25.0).with_hp(15.0), |e| e.damage_reduction = 10.0),
            ),
            tiers(
                Cunning,
                aux(Effect::new().with_crit_rate(5.0), |e| e.crit_dmg = 10.0),
                aux(Effect::new().with_crit_rate(10.0), |e| e.crit_dmg = 20.0),
                aux(Effect::new().with_crit_rate(15.0), |e| {
                    e.crit_dmg = 35.0;
                    e.evasion = 10.0;
                }),
            ),
            tiers(
                Wild,
                Effect::new().with_spd(10.0),
                Effect::new().with_spd(18.0).with_atk(8.0),
                aux(Effect::new().with_spd(25.0).with_atk(15.0), |e| e.counter_rate = 15.0),
            ),
            tiers(
                Mystic,
                Effect::new().with_skill_dmg(12.0),
                Effect::new().with_skill_dmg(20.0).with_spd(5.0),
                Effect::new().with_skill_dmg(30.0).with_all(5.0),
            ),
        ],
        special_combos: vec![
            combo(
                "thunder_pact",
                "Thunder Pact",
                &["hero_001", "hero_002"],
                Effect::new().with_atk(15.0).with_crit_rate(5.0),
            ),
            combo(
                "underworld_court",
                "Underworld Court",
                &["hero_004", "hero_005", "hero_006"],
                aux(Effect::new().with_hp(10.0), |e| e.lifesteal = 8.0),
            ),
            combo(
                "sun_and_moon",
                "Sun and Moon",
                &["hero_003", "hero_007"],
                Effect::new().with_all(6.0).with_skill_dmg(10.0),
            ),
        ],
        ..SynergiesConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_synergies() {
        let toml = r#"
balance_min_distinct = 4

[[temperament_effects]]
temperament = "wild"
pair = { spd = 10 }
trio = { spd = 18, atk = 8 }
full = { spd = 25, atk = 15, counter_rate = 15 }

[[special_combos]]
id = "twin_blades"
name = "Twin Blades"
required = ["hero_001", "hero_002"]
effect = { atk = 12 }
"#;

        let config = parse_synergy_configs(toml).unwrap();
        assert_eq!(config.balance_min_distinct, 4);
        assert_eq!(config.presence_temperament, Temperament::Mystic);

        let wild = config.temperament_effects(Temperament::Wild).unwrap();
        assert!((wild.for_count(3).spd - 18.0).abs() < f64::EPSILON);
        assert!((wild.for_count(4).counter_rate - 15.0).abs() < f64::EPSILON);
        assert!(wild.for_count(1).is_empty());
        assert!(config.temperament_effects(Temperament::Noble).is_none());

        assert_eq!(config.special_combos[0].required.len(), 2);
        // Unspecified tables fall back to the standard values
        assert!((config.archetype.balanced_team.all - 8.0).abs() < f64::EPSILON);
        assert!((config.faction_tiers.full.spd - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_combo_rejected() {
        let toml = r#"
[[special_combos]]
id = "nobody"
required = []
"#;
        assert!(matches!(
            parse_synergy_configs(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_default_synergies_loads_all() {
        let config = default_synergies();
        assert_eq!(config.temperament_effects.len(), 5);
        for temperament in [
            Temperament::Brave,
            Temperament::Calm,
            Temperament::Cunning,
            Temperament::Wild,
            Temperament::Mystic,
        ] {
            assert!(
                config.temperament_effects(temperament).is_some(),
                "Missing effects for: {}",
                temperament
            );
        }
        assert!(!config.special_combos.is_empty());
        assert_eq!(config.party_bonus.pair_combos.len(), 4);
    }

    #[test]
    fn test_default_file_matches_builtin() {
        assert_eq!(default_synergies(), builtin_synergies());
    }
}
