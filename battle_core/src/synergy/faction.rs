//! Faction synergy: the dominant faction's bonus, scaled by member count

use super::{count_tier, Effect, SynergyKind, SynergyRecord};
use crate::affinity::{AffinityError, FactionAffinityTable};
use crate::config::FactionTierConfig;
use crate::types::{CombatantDescriptor, Faction};

/// Fewest same-faction members that can trigger a faction synergy
pub const MIN_FACTION_MEMBERS: usize = 2;

/// Member count per faction, in first-seen order
fn faction_counts(party: &[CombatantDescriptor]) -> Vec<(Faction, usize)> {
    let mut counts: Vec<(Faction, usize)> = Vec::new();
    for member in party {
        match counts.iter_mut().find(|(f, _)| *f == member.faction) {
            Some((_, count)) => *count += 1,
            None => counts.push((member.faction, 1)),
        }
    }
    counts
}

/// Faction with the most members; ties go to the first seen
pub(crate) fn dominant_faction(party: &[CombatantDescriptor]) -> Option<(Faction, usize)> {
    let mut best: Option<(Faction, usize)> = None;
    for (faction, count) in faction_counts(party) {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((faction, count));
        }
    }
    best
}

fn tier_name(count: usize) -> &'static str {
    match count {
        0..=2 => "Resonance",
        3 => "Bond",
        _ => "Ascendancy",
    }
}

pub(crate) fn faction_synergy(
    party: &[CombatantDescriptor],
    affinity: &FactionAffinityTable,
    tiers: &FactionTierConfig,
) -> Result<Option<SynergyRecord>, AffinityError> {
    let Some((faction, count)) = dominant_faction(party) else {
        return Ok(None);
    };
    // A lone member never forms a faction synergy, whatever the table says
    if count < tiers.min_count.max(MIN_FACTION_MEMBERS) {
        return Ok(None);
    }

    let base = affinity.synergy_bonus_for(faction)?;

    let effect = if count >= 4 {
        Effect {
            atk: base.atk * 100.0 + tiers.full.atk,
            def: base.def * 100.0 + tiers.full.def,
            hp: base.hp * 100.0 + tiers.full.hp,
            spd: base.spd * 100.0 + tiers.full.spd,
            ..Effect::default()
        }
    } else if count == 3 {
        Effect {
            atk: base.atk * 100.0 + tiers.trio.atk,
            def: base.def * 100.0 + tiers.trio.def,
            hp: tiers.trio.hp,
            spd: tiers.trio.spd,
            ..Effect::default()
        }
    } else {
        Effect::new().with_atk(base.atk * 100.0)
    };

    Ok(Some(
        SynergyRecord::new(
            SynergyKind::Faction,
            format!("faction_{}_{}", faction, count),
            faction.to_string(),
            format!("{} {}", capitalize(faction.as_ref()), tier_name(count)),
            count,
            effect,
        )
        .with_tier(count_tier(count)),
    ))
}

pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
