//! PartySynergyCalculator - Bonuses unlocked by party composition
//!
//! A party is scanned in four passes, and records are returned in this order:
//! 1. Faction: at most one record, for the dominant faction (2+ members)
//! 2. Temperament: one per temperament with 2+ members (discovery order),
//!    then the diversity balance record, then the presence record
//! 3. Archetype: balanced team, full offense, turtle formation
//! 4. Special combos, in declaration order
//!
//! The order matters: stat composition applies records sequentially.

mod archetype;
mod effect;
mod faction;
mod preview;
mod special;
mod temperament;

pub use effect::Effect;
pub use faction::MIN_FACTION_MEMBERS;
pub use preview::{format_summary, SynergyPreview};

use crate::affinity::{AffinityError, FactionAffinityTable};
use crate::config::SynergiesConfig;
use crate::types::CombatantDescriptor;
use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

/// Synergy calculation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynergyError {
    #[error("Faction lookup failed: {0}")]
    Affinity(#[from] AffinityError),
}

/// Source of a synergy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SynergyKind {
    Faction,
    Temperament,
    /// Several distinct temperaments in the party
    Balance,
    /// A temperament that grants a bonus just by being fielded
    Presence,
    Archetype,
    Special,
}

/// One active synergy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyRecord {
    pub kind: SynergyKind,
    /// Stable identifier, e.g. `faction_valhalla_3`
    pub id: String,
    /// What triggered it: faction/temperament name, role pattern or combo id
    pub key: String,
    /// Display name
    pub name: String,
    /// Number of members that triggered it
    pub triggering_count: usize,
    /// Strength tier (member count for faction/temperament, 1 otherwise)
    pub tier: u8,
    pub effect: Effect,
    /// Required members, for special combos
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
}

impl SynergyRecord {
    pub(crate) fn new(
        kind: SynergyKind,
        id: impl Into<String>,
        key: impl Into<String>,
        name: impl Into<String>,
        triggering_count: usize,
        effect: Effect,
    ) -> Self {
        SynergyRecord {
            kind,
            id: id.into(),
            key: key.into(),
            name: name.into(),
            triggering_count,
            tier: 1,
            effect,
            members: Vec::new(),
        }
    }

    pub(crate) fn with_tier(mut self, tier: u8) -> Self {
        self.tier = tier;
        self
    }
}

/// Tier for a member count, capped at the full-party tier
pub(crate) fn count_tier(count: usize) -> u8 {
    count.min(crate::types::MAX_PARTY_SIZE) as u8
}

/// Computes party synergies against injected tables
#[derive(Debug, Clone, Copy)]
pub struct PartySynergyCalculator<'a> {
    affinity: &'a FactionAffinityTable,
    config: &'a SynergiesConfig,
}

impl<'a> PartySynergyCalculator<'a> {
    pub fn new(affinity: &'a FactionAffinityTable, config: &'a SynergiesConfig) -> Self {
        PartySynergyCalculator { affinity, config }
    }

    /// Compute every active synergy for a party
    ///
    /// An empty party yields no synergies. Only the faction pass can fail,
    /// and only when the dominant faction (2+ members) has no table row.
    pub fn compute_synergies(
        &self,
        party: &[CombatantDescriptor],
    ) -> Result<Vec<SynergyRecord>, SynergyError> {
        let mut synergies = Vec::new();
        if party.is_empty() {
            return Ok(synergies);
        }

        if let Some(record) = faction::faction_synergy(party, self.affinity, &self.config.faction_tiers)? {
            synergies.push(record);
        }
        synergies.extend(temperament::temperament_synergies(party, self.config));
        synergies.extend(archetype::archetype_synergies(party, &self.config.archetype));
        synergies.extend(special::special_synergies(party, &self.config.special_combos));

        tracing::debug!(
            party_size = party.len(),
            active = synergies.len(),
            ids = ?synergies.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            "party synergies computed"
        );

        Ok(synergies)
    }

    /// Compute synergies plus totals and a summary
    pub fn preview(&self, party: &[CombatantDescriptor]) -> Result<SynergyPreview, SynergyError> {
        Ok(SynergyPreview::from_records(self.compute_synergies(party)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_synergies;
    use crate::types::{Archetype, CoreStats, Faction, Temperament};

    fn hero(id: &str, faction: Faction, temperament: Temperament, archetype: Archetype) -> CombatantDescriptor {
        CombatantDescriptor::new(id, temperament, faction, archetype, CoreStats::new(1000, 100, 50, 10))
    }

    #[test]
    fn test_empty_party() {
        let affinity = FactionAffinityTable::with_defaults();
        let config = default_synergies();
        let calc = PartySynergyCalculator::new(&affinity, &config);
        assert_eq!(calc.compute_synergies(&[]).unwrap(), vec![]);
    }

    #[test]
    fn test_single_member_only_combos() {
        let affinity = FactionAffinityTable::with_defaults();
        let config = default_synergies();
        let calc = PartySynergyCalculator::new(&affinity, &config);

        let party = [hero("hero_001", Faction::Valhalla, Temperament::Brave, Archetype::Warrior)];
        assert!(calc.compute_synergies(&party).unwrap().is_empty());
    }

    #[test]
    fn test_record_order() {
        let affinity = FactionAffinityTable::with_defaults();
        let config = default_synergies();
        let calc = PartySynergyCalculator::new(&affinity, &config);

        let party = [
            hero("hero_001", Faction::Valhalla, Temperament::Brave, Archetype::Warrior),
            hero("hero_002", Faction::Valhalla, Temperament::Brave, Archetype::Mage),
            hero("hero_003", Faction::Valhalla, Temperament::Calm, Archetype::Healer),
            hero("hero_004", Faction::Olympus, Temperament::Mystic, Archetype::Archer),
        ];
        let synergies = calc.compute_synergies(&party).unwrap();
        let ids: Vec<&str> = synergies.iter().map(|s| s.id.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "faction_valhalla_3",
                "temperament_brave_2",
                "temperament_balance",
                "mystic_presence",
                "balanced_team",
                "thunder_pact",
            ]
        );
    }

    #[test]
    fn test_unknown_dominant_faction_propagates() {
        let affinity = FactionAffinityTable::new(
            crate::config::parse_faction_configs(
                r#"
[[factions]]
faction = "yomi"
primary = "wild"
"#,
            )
            .unwrap(),
            crate::config::PartyBonusConfig::default(),
        );
        let config = default_synergies();
        let calc = PartySynergyCalculator::new(&affinity, &config);

        // A lone unknown faction member is fine
        let solo = [
            hero("a", Faction::Kunlun, Temperament::Brave, Archetype::Warrior),
            hero("b", Faction::Yomi, Temperament::Calm, Archetype::Warrior),
        ];
        assert!(calc.compute_synergies(&solo).is_ok());

        // Two of them trigger the lookup
        let pair = [
            hero("a", Faction::Kunlun, Temperament::Brave, Archetype::Warrior),
            hero("b", Faction::Kunlun, Temperament::Calm, Archetype::Warrior),
        ];
        assert_eq!(
            calc.compute_synergies(&pair),
            Err(SynergyError::Affinity(AffinityError::UnknownFaction(
                "kunlun".to_string()
            )))
        );
    }
}
