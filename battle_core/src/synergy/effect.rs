//! Effect - Sparse set of percent deltas granted by a synergy

use serde::{Deserialize, Serialize};
use std::fmt;

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

/// Percent deltas carried by a synergy (10.0 = +10%)
///
/// Core stat fields (`atk`, `def`, `hp`, `spd`, `all`) scale base stats.
/// The remaining fields are auxiliary combat modifiers that are only summed.
/// Absent fields are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Effect {
    #[serde(skip_serializing_if = "is_zero")]
    pub atk: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub def: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub hp: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub spd: f64,
    /// Flat bonus applied to all four core stats
    #[serde(skip_serializing_if = "is_zero")]
    pub all: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub crit_rate: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub crit_dmg: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub lifesteal: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub damage_reduction: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub evasion: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub counter_rate: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub skill_dmg: f64,
}

impl Effect {
    pub fn new() -> Self {
        Effect::default()
    }

    pub fn with_atk(mut self, value: f64) -> Self {
        self.atk = value;
        self
    }

    pub fn with_def(mut self, value: f64) -> Self {
        self.def = value;
        self
    }

    pub fn with_hp(mut self, value: f64) -> Self {
        self.hp = value;
        self
    }

    pub fn with_spd(mut self, value: f64) -> Self {
        self.spd = value;
        self
    }

    pub fn with_all(mut self, value: f64) -> Self {
        self.all = value;
        self
    }

    pub fn with_crit_rate(mut self, value: f64) -> Self {
        self.crit_rate = value;
        self
    }

    pub fn with_skill_dmg(mut self, value: f64) -> Self {
        self.skill_dmg = value;
        self
    }

    /// True if every field is zero
    pub fn is_empty(&self) -> bool {
        *self == Effect::default()
    }

    /// Field-wise sum
    pub fn merge(&mut self, other: &Effect) {
        self.atk += other.atk;
        self.def += other.def;
        self.hp += other.hp;
        self.spd += other.spd;
        self.all += other.all;
        self.crit_rate += other.crit_rate;
        self.crit_dmg += other.crit_dmg;
        self.lifesteal += other.lifesteal;
        self.damage_reduction += other.damage_reduction;
        self.evasion += other.evasion;
        self.counter_rate += other.counter_rate;
        self.skill_dmg += other.skill_dmg;
    }

    /// Sum every field across a list of effects
    pub fn total<'a>(effects: impl IntoIterator<Item = &'a Effect>) -> Effect {
        let mut total = Effect::default();
        for effect in effects {
            total.merge(effect);
        }
        total
    }

    /// Non-zero fields as (name, value) pairs, in a fixed order
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        [
            ("atk", self.atk),
            ("def", self.def),
            ("hp", self.hp),
            ("spd", self.spd),
            ("all", self.all),
            ("crit_rate", self.crit_rate),
            ("crit_dmg", self.crit_dmg),
            ("lifesteal", self.lifesteal),
            ("damage_reduction", self.damage_reduction),
            ("evasion", self.evasion),
            ("counter_rate", self.counter_rate),
            ("skill_dmg", self.skill_dmg),
        ]
        .into_iter()
        .filter(|(_, v)| *v != 0.0)
        .collect()
    }

    /// Sum of the core stat fields, used to compare synergy strength
    pub fn core_magnitude(&self) -> f64 {
        self.atk + self.def + self.hp + self.spd + 4.0 * self.all
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .entries()
            .into_iter()
            .map(|(name, value)| format!("{} {:+}%", name, value))
            .collect();
        if parts.is_empty() {
            write!(f, "no effect")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}
