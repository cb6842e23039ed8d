//! Temperament synergies: shared temperaments, diversity balance and presence

use super::faction::capitalize;
use super::{count_tier, SynergyKind, SynergyRecord};
use crate::config::SynergiesConfig;
use crate::types::{CombatantDescriptor, Temperament};

/// Member count per temperament, in first-seen order
pub(crate) fn temperament_counts(party: &[CombatantDescriptor]) -> Vec<(Temperament, usize)> {
    let mut counts: Vec<(Temperament, usize)> = Vec::new();
    for member in party {
        match counts.iter_mut().find(|(t, _)| *t == member.temperament) {
            Some((_, count)) => *count += 1,
            None => counts.push((member.temperament, 1)),
        }
    }
    counts
}

fn tier_name(count: usize) -> &'static str {
    match count {
        0..=2 => "Echo",
        3 => "Harmony",
        _ => "Apex",
    }
}

pub(crate) fn temperament_synergies(
    party: &[CombatantDescriptor],
    config: &SynergiesConfig,
) -> Vec<SynergyRecord> {
    let counts = temperament_counts(party);
    let mut records = Vec::new();

    for &(temperament, count) in counts.iter().filter(|(_, c)| *c >= 2) {
        let effect = config
            .temperament_effects(temperament)
            .map(|e| e.for_count(count))
            .unwrap_or_default();
        let tier = count_tier(count);
        records.push(
            SynergyRecord::new(
                SynergyKind::Temperament,
                format!("temperament_{}_{}", temperament, tier),
                temperament.to_string(),
                format!("{} {}", capitalize(temperament.as_ref()), tier_name(count)),
                count,
                effect,
            )
            .with_tier(tier),
        );
    }

    if counts.len() >= config.balance_min_distinct {
        records.push(SynergyRecord::new(
            SynergyKind::Balance,
            "temperament_balance",
            "balance",
            "Balance of Temperaments",
            counts.len(),
            config.balance_effect,
        ));
    }

    let presence = config.presence_temperament;
    if let Some(&(_, count)) = counts.iter().find(|(t, _)| *t == presence) {
        records.push(SynergyRecord::new(
            SynergyKind::Presence,
            format!("{}_presence", presence),
            presence.to_string(),
            format!("{} Presence", capitalize(presence.as_ref())),
            count,
            config.presence_effect,
        ));
    }

    records
}
