//! Synergy preview for party-formation screens

use super::{Effect, SynergyRecord};
use serde::Serialize;

/// Active synergies with their combined effect and a printable summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynergyPreview {
    pub active: Vec<SynergyRecord>,
    pub count: usize,
    /// Field-wise sum of every active effect
    pub total_effect: Effect,
    pub summary: String,
}

impl SynergyPreview {
    pub fn from_records(active: Vec<SynergyRecord>) -> Self {
        let total_effect = Effect::total(active.iter().map(|s| &s.effect));
        let summary = format_summary(&active);
        SynergyPreview {
            count: active.len(),
            active,
            total_effect,
            summary,
        }
    }
}

/// One `- name` line per synergy
pub fn format_summary(synergies: &[SynergyRecord]) -> String {
    if synergies.is_empty() {
        return "No active synergies".to_string();
    }
    synergies
        .iter()
        .map(|s| format!("- {}", s.name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synergy::SynergyKind;

    #[test]
    fn test_empty_preview() {
        let preview = SynergyPreview::from_records(vec![]);
        assert_eq!(preview.count, 0);
        assert!(preview.total_effect.is_empty());
        assert_eq!(preview.summary, "No active synergies");
    }

    #[test]
    fn test_preview_totals() {
        let records = vec![
            SynergyRecord::new(SynergyKind::Archetype, "a", "a", "Alpha", 3, Effect::new().with_atk(20.0)),
            SynergyRecord::new(SynergyKind::Balance, "b", "b", "Beta", 3, Effect::new().with_all(5.0).with_atk(1.0)),
        ];
        let preview = SynergyPreview::from_records(records);
        assert_eq!(preview.count, 2);
        assert!((preview.total_effect.atk - 21.0).abs() < f64::EPSILON);
        assert_eq!(preview.summary, "- Alpha\n- Beta");
    }
}
