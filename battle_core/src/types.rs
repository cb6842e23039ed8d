//! Core types specific to battle_core

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

/// Behavioral category of a combatant
///
/// Drives matchup multipliers and temperament synergies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Temperament {
    Brave,
    Fierce,
    Wild,
    Calm,
    Stoic,
    Devoted,
    Cunning,
    Noble,
    Mystic,
}

impl Temperament {
    /// Get all temperaments in declaration order
    pub fn all() -> Vec<Temperament> {
        Temperament::iter().collect()
    }

    /// Coarse grouping used for descriptions and team building hints
    pub fn group(self) -> TemperamentGroup {
        match self {
            Temperament::Brave | Temperament::Fierce | Temperament::Wild => {
                TemperamentGroup::Offensive
            }
            Temperament::Calm | Temperament::Stoic | Temperament::Devoted => {
                TemperamentGroup::Defensive
            }
            Temperament::Cunning | Temperament::Noble | Temperament::Mystic => {
                TemperamentGroup::Strategic
            }
        }
    }
}

/// Three-way grouping of temperaments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TemperamentGroup {
    Offensive,
    Defensive,
    Strategic,
}

/// Allegiance group of a combatant
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    Valhalla,
    Takamagahara,
    Olympus,
    Asgard,
    Yomi,
    Tartarus,
    Avalon,
    Helheim,
    Kunlun,
}

impl Faction {
    /// Get all factions in declaration order
    pub fn all() -> Vec<Faction> {
        Faction::iter().collect()
    }
}

/// Combat role, only used for role-balance synergies
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case", from = "String")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    Warrior,
    Tank,
    Mage,
    Archer,
    Assassin,
    Healer,
    Support,
    /// Anything the roster supplies that we don't recognise
    #[default]
    Unclassified,
}

impl From<String> for Archetype {
    fn from(name: String) -> Self {
        Archetype::parse_lenient(&name)
    }
}

impl Archetype {
    /// Parse an archetype name, falling back to `Unclassified`
    pub fn parse_lenient(name: &str) -> Archetype {
        name.parse().unwrap_or(Archetype::Unclassified)
    }

    /// Coarse role bucket used for balance counting
    ///
    /// Unclassified archetypes count as melee (tank bucket).
    pub fn bucket(self) -> RoleBucket {
        match self {
            Archetype::Mage | Archetype::Archer | Archetype::Assassin => RoleBucket::Attacker,
            Archetype::Healer | Archetype::Support => RoleBucket::Support,
            Archetype::Warrior | Archetype::Tank | Archetype::Unclassified => RoleBucket::Tank,
        }
    }
}

/// Role bucket for archetype synergies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleBucket {
    Attacker,
    Tank,
    Support,
}

/// The four core combat stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoreStats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spd: u32,
}

impl CoreStats {
    pub fn new(hp: u32, atk: u32, def: u32, spd: u32) -> Self {
        CoreStats { hp, atk, def, spd }
    }
}

impl fmt::Display for CoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HP {} / ATK {} / DEF {} / SPD {}",
            self.hp, self.atk, self.def, self.spd
        )
    }
}

/// A combatant as supplied by the roster layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantDescriptor {
    /// Unique within a party
    pub id: String,
    pub temperament: Temperament,
    pub faction: Faction,
    #[serde(default)]
    pub archetype: Archetype,
    pub base_stats: CoreStats,
}

impl CombatantDescriptor {
    pub fn new(
        id: impl Into<String>,
        temperament: Temperament,
        faction: Faction,
        archetype: Archetype,
        base_stats: CoreStats,
    ) -> Self {
        CombatantDescriptor {
            id: id.into(),
            temperament,
            faction,
            archetype,
            base_stats,
        }
    }
}

/// Roster error when converting raw entries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Unknown temperament '{value}' on combatant '{id}'")]
    UnknownTemperament { id: String, value: String },
    #[error("Unknown faction '{value}' on combatant '{id}'")]
    UnknownFaction { id: String, value: String },
}

/// Stringly-typed roster row, as stored by the roster/persistence layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub temperament: String,
    pub faction: String,
    #[serde(default)]
    pub archetype: String,
    pub base_stats: CoreStats,
}

impl TryFrom<RosterEntry> for CombatantDescriptor {
    type Error = RosterError;

    fn try_from(entry: RosterEntry) -> Result<Self, Self::Error> {
        let temperament = entry.temperament.parse::<Temperament>().map_err(|_| {
            RosterError::UnknownTemperament {
                id: entry.id.clone(),
                value: entry.temperament.clone(),
            }
        })?;
        let faction = entry
            .faction
            .parse::<Faction>()
            .map_err(|_| RosterError::UnknownFaction {
                id: entry.id.clone(),
                value: entry.faction.clone(),
            })?;

        Ok(CombatantDescriptor {
            temperament,
            faction,
            archetype: Archetype::parse_lenient(&entry.archetype),
            base_stats: entry.base_stats,
            id: entry.id,
        })
    }
}

/// Standard fielded party size
pub const MAX_PARTY_SIZE: usize = 4;

/// Party validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartyError {
    #[error("A party needs at least one combatant")]
    Empty,
    #[error("Party has {0} combatants, maximum is {MAX_PARTY_SIZE}")]
    TooLarge(usize),
    #[error("Duplicate combatant id in party: {0}")]
    DuplicateId(String),
}

/// Validated, ordered party of 1..=4 combatants with unique ids
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartyComposition {
    members: Vec<CombatantDescriptor>,
}

impl PartyComposition {
    /// Validate and build a party
    pub fn new(members: Vec<CombatantDescriptor>) -> Result<Self, PartyError> {
        if members.is_empty() {
            return Err(PartyError::Empty);
        }
        if members.len() > MAX_PARTY_SIZE {
            return Err(PartyError::TooLarge(members.len()));
        }

        let mut seen = HashSet::new();
        for member in &members {
            if !seen.insert(member.id.as_str()) {
                return Err(PartyError::DuplicateId(member.id.clone()));
            }
        }

        Ok(PartyComposition { members })
    }

    /// Build a party from raw roster rows
    pub fn from_roster(entries: Vec<RosterEntry>) -> Result<Self, crate::BattleError> {
        let members = entries
            .into_iter()
            .map(CombatantDescriptor::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PartyComposition::new(members)?)
    }

    pub fn members(&self) -> &[CombatantDescriptor] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Check whether a combatant id is in the party
    pub fn contains_id(&self, id: &str) -> bool {
        self.members.iter().any(|m| m.id == id)
    }
}

impl AsRef<[CombatantDescriptor]> for PartyComposition {
    fn as_ref(&self) -> &[CombatantDescriptor] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str) -> CombatantDescriptor {
        CombatantDescriptor::new(
            id,
            Temperament::Brave,
            Faction::Valhalla,
            Archetype::Warrior,
            CoreStats::new(1000, 100, 50, 10),
        )
    }

    #[test]
    fn test_temperament_parse_case_insensitive() {
        assert_eq!("MYSTIC".parse::<Temperament>(), Ok(Temperament::Mystic));
        assert_eq!("brave".parse::<Temperament>(), Ok(Temperament::Brave));
        assert!("neutral".parse::<Temperament>().is_err());
    }

    #[test]
    fn test_nine_temperaments_and_factions() {
        assert_eq!(Temperament::all().len(), 9);
        assert_eq!(Faction::all().len(), 9);
    }

    #[test]
    fn test_temperament_groups() {
        assert_eq!(Temperament::Wild.group(), TemperamentGroup::Offensive);
        assert_eq!(Temperament::Devoted.group(), TemperamentGroup::Defensive);
        assert_eq!(Temperament::Mystic.group(), TemperamentGroup::Strategic);
    }

    #[test]
    fn test_archetype_fallback() {
        assert_eq!(Archetype::parse_lenient("bard"), Archetype::Unclassified);
        assert_eq!(Archetype::parse_lenient("Mage"), Archetype::Mage);
        assert_eq!(Archetype::Unclassified.bucket(), RoleBucket::Tank);
        assert_eq!(Archetype::Healer.bucket(), RoleBucket::Support);
    }

    #[test]
    fn test_archetype_deserialize_unknown() {
        let archetype: Archetype = serde_json::from_str("\"paladin\"").unwrap();
        assert_eq!(archetype, Archetype::Unclassified);
    }

    #[test]
    fn test_party_validation() {
        assert_eq!(PartyComposition::new(vec![]), Err(PartyError::Empty));
        assert_eq!(
            PartyComposition::new(vec![member("a"), member("a")]),
            Err(PartyError::DuplicateId("a".to_string()))
        );
        let five = ["a", "b", "c", "d", "e"].iter().map(|id| member(id)).collect();
        assert_eq!(PartyComposition::new(five), Err(PartyError::TooLarge(5)));

        let party = PartyComposition::new(vec![member("a"), member("b")]).unwrap();
        assert_eq!(party.len(), 2);
        assert!(party.contains_id("b"));
        assert!(!party.contains_id("c"));
    }

    #[test]
    fn test_roster_entry_conversion() {
        let entry = RosterEntry {
            id: "hero_1".to_string(),
            temperament: "calm".to_string(),
            faction: "asgard".to_string(),
            archetype: "bard".to_string(),
            base_stats: CoreStats::new(800, 90, 60, 12),
        };
        let descriptor = CombatantDescriptor::try_from(entry).unwrap();
        assert_eq!(descriptor.temperament, Temperament::Calm);
        assert_eq!(descriptor.faction, Faction::Asgard);
        assert_eq!(descriptor.archetype, Archetype::Unclassified);
    }

    #[test]
    fn test_roster_entry_unknown_faction() {
        let entry = RosterEntry {
            id: "hero_1".to_string(),
            temperament: "calm".to_string(),
            faction: "atlantis".to_string(),
            archetype: String::new(),
            base_stats: CoreStats::default(),
        };
        assert_eq!(
            CombatantDescriptor::try_from(entry),
            Err(RosterError::UnknownFaction {
                id: "hero_1".to_string(),
                value: "atlantis".to_string(),
            })
        );
    }
}
