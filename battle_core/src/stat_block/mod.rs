//! EffectiveStats - Base stats after synergy modifiers, plus auxiliary bonuses

mod compositor;

pub use compositor::StatModifierCompositor;

use crate::synergy::Effect;
use crate::types::CoreStats;
use serde::{Deserialize, Serialize};

/// Auxiliary combat modifiers, summed across synergies (fractions, 0.10 = 10%)
///
/// These are never folded into base stats; damage resolution reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BonusBag {
    pub crit_rate: f64,
    pub crit_dmg: f64,
    pub lifesteal: f64,
    pub damage_reduction: f64,
    pub evasion: f64,
    pub counter_rate: f64,
    pub skill_dmg: f64,
}

impl BonusBag {
    /// Add the auxiliary part of an effect
    pub fn accumulate(&mut self, effect: &Effect) {
        self.crit_rate += effect.crit_rate / 100.0;
        self.crit_dmg += effect.crit_dmg / 100.0;
        self.lifesteal += effect.lifesteal / 100.0;
        self.damage_reduction += effect.damage_reduction / 100.0;
        self.evasion += effect.evasion / 100.0;
        self.counter_rate += effect.counter_rate / 100.0;
        self.skill_dmg += effect.skill_dmg / 100.0;
    }

    pub fn is_empty(&self) -> bool {
        *self == BonusBag::default()
    }
}

/// Core stats after composition, plus the bonus bag
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectiveStats {
    pub stats: CoreStats,
    pub bonuses: BonusBag,
}

/// `floor(value × (1 + percent / 100))`
fn scale(value: u32, percent: f64) -> u32 {
    (f64::from(value) * (1.0 + percent / 100.0)).floor() as u32
}

impl EffectiveStats {
    /// Start from unmodified base stats
    pub fn from_base(base: CoreStats) -> Self {
        EffectiveStats {
            stats: base,
            bonuses: BonusBag::default(),
        }
    }

    /// Apply one effect in place
    ///
    /// Each core percentage is applied and floored on its own, then `all`
    /// scales every core stat again. Auxiliary fields only accumulate.
    pub fn apply_effect(&mut self, effect: &Effect) {
        if effect.atk != 0.0 {
            self.stats.atk = scale(self.stats.atk, effect.atk);
        }
        if effect.def != 0.0 {
            self.stats.def = scale(self.stats.def, effect.def);
        }
        if effect.hp != 0.0 {
            self.stats.hp = scale(self.stats.hp, effect.hp);
        }
        if effect.spd != 0.0 {
            self.stats.spd = scale(self.stats.spd, effect.spd);
        }

        if effect.all != 0.0 {
            self.stats.atk = scale(self.stats.atk, effect.all);
            self.stats.def = scale(self.stats.def, effect.all);
            self.stats.hp = scale(self.stats.hp, effect.all);
            self.stats.spd = scale(self.stats.spd, effect.all);
        }

        self.bonuses.accumulate(effect);
    }
}

impl From<CoreStats> for EffectiveStats {
    fn from(base: CoreStats) -> Self {
        EffectiveStats::from_base(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_floors() {
        assert_eq!(scale(50, 5.0), 52);
        assert_eq!(scale(100, 10.0), 110);
        assert_eq!(scale(7, 50.0), 10);
    }

    #[test]
    fn test_all_applies_after_individual() {
        let mut stats = EffectiveStats::from_base(CoreStats::new(1000, 100, 50, 10));
        stats.apply_effect(&Effect::new().with_atk(10.0).with_all(10.0));
        // 100 -> 110 -> 121
        assert_eq!(stats.stats.atk, 121);
        // 10 * 1.1 = 11.000000000000002 -> 11
        assert_eq!(stats.stats.spd, 11);
        assert_eq!(stats.stats.def, 55);
        assert_eq!(stats.stats.hp, 1100);
    }

    #[test]
    fn test_bonus_bag_is_additive() {
        let mut stats = EffectiveStats::from_base(CoreStats::new(1000, 100, 50, 10));
        let effect = Effect {
            crit_rate: 5.0,
            lifesteal: 5.0,
            ..Effect::default()
        };
        stats.apply_effect(&effect);
        stats.apply_effect(&effect);
        assert!((stats.bonuses.crit_rate - 0.10).abs() < 1e-9);
        assert!((stats.bonuses.lifesteal - 0.10).abs() < 1e-9);
        // Core stats untouched
        assert_eq!(stats.stats, CoreStats::new(1000, 100, 50, 10));
    }
}
