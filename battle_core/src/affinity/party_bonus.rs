//! Party-wide affinity bonus: temperament diversity, temperament pairings
//! and each member's faction affinity

use super::{AffinityError, FactionAffinityTable};
use crate::types::{CombatantDescriptor, Temperament};
use serde::Serialize;

/// One member's faction affinity contribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberAffinity {
    pub id: String,
    pub bonus: f64,
}

/// Aggregate bonus for a whole party (fractions, 0.05 = 5%)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartyAffinityBonus {
    pub total: f64,
    pub diversity_bonus: f64,
    pub pairing_bonus: f64,
    pub member_bonuses: Vec<MemberAffinity>,
    /// Distinct temperaments in discovery order
    pub distinct_temperaments: Vec<Temperament>,
}

impl PartyAffinityBonus {
    /// Sum of all members' faction affinities
    pub fn faction_total(&self) -> f64 {
        self.member_bonuses.iter().map(|m| m.bonus).sum()
    }

    /// Short description of what contributed
    pub fn details(&self) -> String {
        let mut parts = Vec::new();
        if self.diversity_bonus > 0.0 {
            parts.push(format!(
                "diversity +{:.0}% ({} temperaments)",
                self.diversity_bonus * 100.0,
                self.distinct_temperaments.len()
            ));
        }
        if self.pairing_bonus > 0.0 {
            parts.push(format!("pairings +{:.0}%", self.pairing_bonus * 100.0));
        }
        let faction = self.faction_total();
        if faction > 0.0 {
            parts.push(format!("faction affinity +{:.0}%", faction * 100.0));
        }
        if parts.is_empty() {
            "No party bonus".to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl FactionAffinityTable {
    /// Compute the aggregate affinity bonus for a party
    ///
    /// Empty input yields an all-zero bonus.
    pub fn party_bonus(&self, party: &[CombatantDescriptor]) -> Result<PartyAffinityBonus, AffinityError> {
        if party.is_empty() {
            return Ok(PartyAffinityBonus::default());
        }

        let config = self.party_bonus_config();

        let mut distinct: Vec<Temperament> = Vec::new();
        for member in party {
            if !distinct.contains(&member.temperament) {
                distinct.push(member.temperament);
            }
        }

        let mut tiers = config.diversity_tiers.clone();
        tiers.sort_by(|a, b| b.0.cmp(&a.0));
        let diversity_bonus = tiers
            .iter()
            .find(|(min, _)| distinct.len() >= *min)
            .map(|(_, bonus)| *bonus)
            .unwrap_or(0.0);

        let mut pairing_bonus: f64 = config
            .pair_combos
            .iter()
            .filter(|combo| combo.temperaments.iter().all(|t| distinct.contains(t)))
            .map(|combo| combo.bonus)
            .sum();
        if distinct.contains(&self.presence_temperament()) {
            pairing_bonus += config.presence_bonus;
        }

        let member_bonuses = party
            .iter()
            .map(|m| {
                Ok(MemberAffinity {
                    id: m.id.clone(),
                    bonus: self.bonus_for(m.faction, m.temperament)?,
                })
            })
            .collect::<Result<Vec<_>, AffinityError>>()?;

        let mut bonus = PartyAffinityBonus {
            total: 0.0,
            diversity_bonus,
            pairing_bonus,
            member_bonuses,
            distinct_temperaments: distinct,
        };
        bonus.total = bonus.diversity_bonus + bonus.pairing_bonus + bonus.faction_total();

        Ok(bonus)
    }
}
