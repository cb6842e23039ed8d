//! Archetype synergies from coarse role buckets

use super::{SynergyKind, SynergyRecord};
use crate::config::ArchetypeSynergyConfig;
use crate::types::{CombatantDescriptor, RoleBucket};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BucketCounts {
    pub attacker: usize,
    pub tank: usize,
    pub support: usize,
}

pub(crate) fn bucket_counts(party: &[CombatantDescriptor]) -> BucketCounts {
    let mut counts = BucketCounts::default();
    for member in party {
        match member.archetype.bucket() {
            RoleBucket::Attacker => counts.attacker += 1,
            RoleBucket::Tank => counts.tank += 1,
            RoleBucket::Support => counts.support += 1,
        }
    }
    counts
}

pub(crate) fn archetype_synergies(
    party: &[CombatantDescriptor],
    config: &ArchetypeSynergyConfig,
) -> Vec<SynergyRecord> {
    let counts = bucket_counts(party);
    let mut records = Vec::new();

    if counts.attacker > 0 && counts.tank > 0 && counts.support > 0 {
        records.push(SynergyRecord::new(
            SynergyKind::Archetype,
            "balanced_team",
            "attacker+tank+support",
            "Balanced Team",
            party.len(),
            config.balanced_team,
        ));
    }

    if counts.attacker >= config.full_offense_min {
        records.push(SynergyRecord::new(
            SynergyKind::Archetype,
            "full_offense",
            "attacker",
            "Full Offense",
            counts.attacker,
            config.full_offense,
        ));
    }

    let defensive = party
        .iter()
        .filter(|m| config.turtle_formation_archetypes.contains(&m.archetype))
        .count();
    if defensive >= config.turtle_formation_min {
        records.push(SynergyRecord::new(
            SynergyKind::Archetype,
            "turtle_formation",
            "defender",
            "Turtle Formation",
            defensive,
            config.turtle_formation,
        ));
    }

    records
}
