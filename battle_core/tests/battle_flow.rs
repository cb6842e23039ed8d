//! End-to-end: roster rows -> party -> synergies -> stats -> matchups -> phases

use battle_core::prelude::*;
use battle_core::{BattleError, PhaseError, RosterError, SynergyKind};

fn entry(id: &str, temperament: &str, faction: &str, archetype: &str) -> RosterEntry {
    RosterEntry {
        id: id.to_string(),
        temperament: temperament.to_string(),
        faction: faction.to_string(),
        archetype: archetype.to_string(),
        base_stats: CoreStats::new(1000, 100, 50, 10),
    }
}

fn roster() -> Vec<RosterEntry> {
    vec![
        entry("hero_001", "brave", "valhalla", "warrior"),
        entry("hero_002", "Brave", "valhalla", "mage"),
        entry("hero_003", "calm", "valhalla", "healer"),
        entry("hero_004", "mystic", "olympus", "archer"),
    ]
}

#[test]
fn test_full_battle_setup() {
    let rules = BattleRules::standard();
    let party = PartyComposition::from_roster(roster()).unwrap();

    let synergies = rules.synergy_calculator().compute_synergies(party.members()).unwrap();
    let kinds: Vec<SynergyKind> = synergies.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SynergyKind::Faction,
            SynergyKind::Temperament,
            SynergyKind::Balance,
            SynergyKind::Presence,
            SynergyKind::Archetype,
            SynergyKind::Special,
        ]
    );

    let stats = rules.compositor().apply_party(party.members(), &synergies);
    assert_eq!(stats.len(), 4);
    let (id, hero) = &stats[0];
    assert_eq!(id, "hero_001");
    // Each synergy floors before the next applies
    assert_eq!(hero.stats, CoreStats::new(1134, 164, 61, 10));
    assert!((hero.bonuses.crit_rate - 0.05).abs() < 1e-9);
    assert!((hero.bonuses.skill_dmg - 0.10).abs() < 1e-9);

    let attacker = party.members()[0].temperament;
    let damage = rules
        .matchups()
        .scale_damage(f64::from(hero.stats.atk), attacker, Temperament::Wild)
        .unwrap();
    assert!((damage - 164.0 * 1.2).abs() < 1e-9);

    let mut phases = BattlePhaseMachine::new();
    phases.transition_to(BattlePhase::PlayerInput).unwrap();
    phases.transition_to(BattlePhase::Targeting).unwrap();
    phases.transition_to(BattlePhase::Executing).unwrap();
    phases.transition_to(BattlePhase::Resolving).unwrap();
    phases.transition_to(BattlePhase::BattleEnd).unwrap();
    assert_eq!(phases.history().len(), 6);
    assert_eq!(
        phases.transition_to(BattlePhase::PlayerInput),
        Err(PhaseError::InvalidTransition {
            from: BattlePhase::BattleEnd,
            to: BattlePhase::PlayerInput,
        })
    );
}

#[test]
fn test_preview_summary() {
    let rules = BattleRules::standard();
    let party = PartyComposition::from_roster(roster()).unwrap();
    let preview = rules.synergy_calculator().preview(party.members()).unwrap();

    assert_eq!(preview.count, 6);
    assert!(preview.summary.contains("- Thunder Pact"));
    assert!(preview.summary.contains("- Valhalla Bond"));
    assert!((preview.total_effect.all - 13.0).abs() < 1e-9);
}

#[test]
fn test_party_affinity() {
    let rules = BattleRules::standard();
    let party = PartyComposition::from_roster(roster()).unwrap();
    let bonus = rules.affinity().party_bonus(party.members()).unwrap();

    // brave, calm, mystic: 3 distinct
    assert_eq!(bonus.distinct_temperaments.len(), 3);
    assert!((bonus.diversity_bonus - 0.08).abs() < 1e-9);
}

#[test]
fn test_bad_roster_rows() {
    let mut rows = roster();
    rows[2].faction = "atlantis".to_string();
    match PartyComposition::from_roster(rows) {
        Err(BattleError::Roster(RosterError::UnknownFaction { id, value })) => {
            assert_eq!(id, "hero_003");
            assert_eq!(value, "atlantis");
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let mut rows = roster();
    rows.push(entry("hero_005", "wild", "yomi", "tank"));
    assert!(matches!(
        PartyComposition::from_roster(rows),
        Err(BattleError::Party(battle_core::PartyError::TooLarge(5)))
    ));
}

#[test]
fn test_unknown_archetype_is_unclassified() {
    let rows = vec![entry("hero_010", "stoic", "helheim", "bard")];
    let party = PartyComposition::from_roster(rows).unwrap();
    assert_eq!(party.members()[0].archetype, Archetype::Unclassified);
}
