//! Startup consistency check for the matchup relation

use super::TemperamentMatchupTable;
use crate::types::Temperament;
use serde::Serialize;
use std::fmt;

/// Number of strong and weak relations every temperament is expected to have
pub const EXPECTED_RELATIONS: usize = 2;

/// A structural problem in the matchup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchupIssue {
    /// Advantage set is not exactly two entries
    AdvantageCount { temperament: Temperament, count: usize },
    /// Disadvantage set is not exactly two entries
    DisadvantageCount { temperament: Temperament, count: usize },
    /// A temperament lists itself
    SelfRelation { temperament: Temperament },
    /// Defender is both strong and weak for the same attacker
    Overlap { attacker: Temperament, defender: Temperament },
    /// Both temperaments claim an advantage over each other
    MutualAdvantage { first: Temperament, second: Temperament },
    /// Both temperaments claim a disadvantage against each other
    MutualDisadvantage { first: Temperament, second: Temperament },
}

impl fmt::Display for MatchupIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchupIssue::AdvantageCount { temperament, count } => write!(
                f,
                "{} has {} advantages, expected {}",
                temperament, count, EXPECTED_RELATIONS
            ),
            MatchupIssue::DisadvantageCount { temperament, count } => write!(
                f,
                "{} has {} disadvantages, expected {}",
                temperament, count, EXPECTED_RELATIONS
            ),
            MatchupIssue::SelfRelation { temperament } => {
                write!(f, "{} lists itself in its matchups", temperament)
            }
            MatchupIssue::Overlap { attacker, defender } => write!(
                f,
                "{} is both strong and weak against {}",
                attacker, defender
            ),
            MatchupIssue::MutualAdvantage { first, second } => {
                write!(f, "{} and {} are each strong against the other", first, second)
            }
            MatchupIssue::MutualDisadvantage { first, second } => {
                write!(f, "{} and {} are each weak against the other", first, second)
            }
        }
    }
}

impl TemperamentMatchupTable {
    /// Scan the relation for structural contradictions
    ///
    /// Every pair is reported once, in row declaration order.
    pub fn check_consistency(&self) -> Vec<MatchupIssue> {
        let mut issues = Vec::new();

        for row in &self.rows {
            let t = row.temperament;
            if row.advantage.len() != EXPECTED_RELATIONS {
                issues.push(MatchupIssue::AdvantageCount {
                    temperament: t,
                    count: row.advantage.len(),
                });
            }
            if row.disadvantage.len() != EXPECTED_RELATIONS {
                issues.push(MatchupIssue::DisadvantageCount {
                    temperament: t,
                    count: row.disadvantage.len(),
                });
            }
            if row.advantage.contains(&t) || row.disadvantage.contains(&t) {
                issues.push(MatchupIssue::SelfRelation { temperament: t });
            }
            for defender in row.advantage.iter().filter(|d| row.disadvantage.contains(d)) {
                issues.push(MatchupIssue::Overlap {
                    attacker: t,
                    defender: *defender,
                });
            }
        }

        for (i, row) in self.rows.iter().enumerate() {
            for other in &self.rows[i + 1..] {
                let (a, b) = (row.temperament, other.temperament);
                if row.advantage.contains(&b) && other.advantage.contains(&a) {
                    issues.push(MatchupIssue::MutualAdvantage { first: a, second: b });
                }
                if row.disadvantage.contains(&b) && other.disadvantage.contains(&a) {
                    issues.push(MatchupIssue::MutualDisadvantage { first: a, second: b });
                }
            }
        }

        issues
    }

    /// True if `check_consistency` finds nothing
    pub fn is_consistent(&self) -> bool {
        self.check_consistency().is_empty()
    }
}
