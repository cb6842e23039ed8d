//! Special synergies: fixed combos of specific combatants

use super::{SynergyKind, SynergyRecord};
use crate::config::SpecialCombo;
use crate::types::CombatantDescriptor;

pub(crate) fn special_synergies(
    party: &[CombatantDescriptor],
    combos: &[SpecialCombo],
) -> Vec<SynergyRecord> {
    combos
        .iter()
        .filter(|combo| {
            combo
                .required
                .iter()
                .all(|id| party.iter().any(|m| &m.id == id))
        })
        .map(|combo| {
            let name = if combo.name.is_empty() {
                combo.id.clone()
            } else {
                combo.name.clone()
            };
            let mut record = SynergyRecord::new(
                SynergyKind::Special,
                combo.id.clone(),
                combo.id.clone(),
                name,
                combo.required.len(),
                combo.effect,
            );
            record.members = combo.required.clone();
            record
        })
        .collect()
}
