//! StatModifierCompositor - Folds synergy effects into base stats

use super::EffectiveStats;
use crate::source::StatSource;
use crate::synergy::SynergyRecord;
use crate::types::{CombatantDescriptor, CoreStats};

/// Applies modifiers to base stats, in order, flooring after every step
///
/// Stateless. The order of synergies changes the result through the
/// per-step floor, so callers pass them in calculator order.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatModifierCompositor;

impl StatModifierCompositor {
    pub fn new() -> Self {
        StatModifierCompositor
    }

    /// Apply synergies to base stats
    pub fn apply(&self, base: CoreStats, synergies: &[SynergyRecord]) -> EffectiveStats {
        let mut stats = EffectiveStats::from_base(base);
        for synergy in synergies {
            stats.apply_effect(&synergy.effect);
        }
        stats
    }

    /// Apply arbitrary sources, ordered by priority (stable)
    pub fn apply_sources(&self, base: CoreStats, sources: &[&dyn StatSource]) -> EffectiveStats {
        let mut sorted: Vec<_> = sources.iter().collect();
        sorted.sort_by_key(|s| s.priority());

        let mut stats = EffectiveStats::from_base(base);
        for source in sorted {
            source.apply(&mut stats);
        }
        stats
    }

    /// Apply the same synergies to every member of a party
    pub fn apply_party(
        &self,
        party: &[CombatantDescriptor],
        synergies: &[SynergyRecord],
    ) -> Vec<(String, EffectiveStats)> {
        party
            .iter()
            .map(|member| (member.id.clone(), self.apply(member.base_stats, synergies)))
            .collect()
    }
}
