//! Whole-table views: the full matchup chart and per-defender counter lists

use super::{MatchupCategory, MatchupError, TemperamentMatchupTable};
use crate::types::Temperament;
use serde::Serialize;

/// One attacker's result against a fixed defender
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterEntry {
    pub temperament: Temperament,
    pub multiplier: f64,
}

/// Attackers grouped by how they fare against a defender
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterReport {
    pub defender: Temperament,
    pub advantageous: Vec<CounterEntry>,
    pub neutral: Vec<CounterEntry>,
    pub disadvantageous: Vec<CounterEntry>,
}

impl CounterReport {
    /// Short recommendation line
    pub fn recommendation(&self) -> String {
        if self.advantageous.is_empty() {
            return format!("Nothing has an edge over {}", self.defender);
        }
        let names: Vec<String> = self
            .advantageous
            .iter()
            .map(|e| e.temperament.to_string())
            .collect();
        format!("Against {}, field {}", self.defender, names.join(", "))
    }
}

/// Full attacker × defender matrix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupChart {
    pub temperaments: Vec<Temperament>,
    /// `cells[a][d]` is attacker `temperaments[a]` against defender `temperaments[d]`
    pub cells: Vec<Vec<(f64, MatchupCategory)>>,
}

impl MatchupChart {
    /// Look up a single cell
    pub fn get(&self, attacker: Temperament, defender: Temperament) -> Option<(f64, MatchupCategory)> {
        let a = self.temperaments.iter().position(|t| *t == attacker)?;
        let d = self.temperaments.iter().position(|t| *t == defender)?;
        Some(self.cells[a][d])
    }
}

impl TemperamentMatchupTable {
    /// Build the full chart for every temperament with a row
    pub fn chart(&self) -> Result<MatchupChart, MatchupError> {
        let temperaments: Vec<Temperament> = self.temperaments().collect();
        let mut cells = Vec::with_capacity(temperaments.len());

        for &attacker in &temperaments {
            let mut row = Vec::with_capacity(temperaments.len());
            for &defender in &temperaments {
                let result = self.multiplier_for(attacker, defender)?;
                row.push((result.multiplier, result.category));
            }
            cells.push(row);
        }

        Ok(MatchupChart {
            temperaments,
            cells,
        })
    }

    /// Group every other temperament by how it fares attacking `defender`
    pub fn counters_for(&self, defender: Temperament) -> Result<CounterReport, MatchupError> {
        let mut report = CounterReport {
            defender,
            advantageous: Vec::new(),
            neutral: Vec::new(),
            disadvantageous: Vec::new(),
        };

        for attacker in self.temperaments().filter(|t| *t != defender) {
            let result = self.multiplier_for(attacker, defender)?;
            let entry = CounterEntry {
                temperament: attacker,
                multiplier: result.multiplier,
            };
            match result.category {
                MatchupCategory::Advantage => report.advantageous.push(entry),
                MatchupCategory::Neutral => report.neutral.push(entry),
                MatchupCategory::Disadvantage => report.disadvantageous.push(entry),
            }
        }

        Ok(report)
    }
}
