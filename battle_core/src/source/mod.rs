//! StatSource - Trait and implementations for stat modifier providers

use crate::stat_block::EffectiveStats;
use crate::synergy::{Effect, SynergyRecord};

/// Trait for anything that modifies a combatant's effective stats
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Sources with equal priority keep their given order.
    /// Suggested priorities:
    /// - Synergies: 0
    /// - Event/item effects: 100
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source to the stats
    fn apply(&self, stats: &mut EffectiveStats);
}

impl StatSource for SynergyRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&self, stats: &mut EffectiveStats) {
        stats.apply_effect(&self.effect);
    }
}

/// A named effect that does not come from party composition
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSource {
    pub source_id: String,
    pub name: String,
    pub effect: Effect,
    priority: i32,
}

impl EffectSource {
    pub fn new(source_id: impl Into<String>, name: impl Into<String>, effect: Effect) -> Self {
        EffectSource {
            source_id: source_id.into(),
            name: name.into(),
            effect,
            priority: 100,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl StatSource for EffectSource {
    fn id(&self) -> &str {
        &self.source_id
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn apply(&self, stats: &mut EffectiveStats) {
        stats.apply_effect(&self.effect);
    }
}
