//! Algebraic properties of the rating calculator

mod common;

use proptest::prelude::*;

use runeward::core::config::AiConfig;
use runeward::core::types::{MapCoord, PlayerId, SkillId, UnitDefId, UnitId};
use runeward::rating::calculator::{additive_contribution, rate_unit};
use runeward::rules::defs::{RatingModifier, SkillDef, SkillValue, UnitDef};
use runeward::world::snapshot::{KnownWizard, PlayerKind, Unit};

use common::*;

fn fresh_unit(def: UnitDefId) -> Unit {
    Unit {
        id: UnitId::new(),
        owner: PlayerId(1),
        location: MapCoord::new(0, 0, 0),
        unit_def: def,
        damage_taken: 0,
        experience: 0,
        equipment: vec![],
        enchant_skills: vec![],
        movement_left: 2,
        cargo: vec![],
    }
}

fn lone_wizard() -> KnownWizard {
    KnownWizard {
        player: PlayerId(1),
        kind: PlayerKind::Wizard,
        picks: vec![],
        capital: None,
        available_items: vec![],
        summon_spells: vec![],
    }
}

#[test]
fn test_fresh_units_collapse_potential_to_current() {
    let rules = standard_rules();
    let config = AiConfig::default();
    let wizard = lone_wizard();

    // No damage, no ladder, no items: nothing for potential to improve
    for def in [SPEARMEN, BOWMEN, SETTLERS, SHAMAN, GALLEY, CHAMPION] {
        let rating = rate_unit(&fresh_unit(def), &wizard, &rules, &config).unwrap();
        assert_eq!(
            rating.current, rating.average,
            "unit kind {def:?} should have current == average"
        );
    }
}

#[test]
fn test_noncombatants_rate_zero_whatever_else_they_carry() {
    let mut rules = standard_rules();
    // A harmless unit hauling an enormous rated skill
    rules.add_skill(SkillDef {
        id: SkillId(40),
        name: "Mighty Back".to_string(),
        rating: Some(RatingModifier::Additive {
            per_point: 10,
            diminishing_after: None,
        }),
    });
    rules.add_unit(UnitDef {
        id: UnitDefId(40),
        name: "Pack Mules".to_string(),
        skills: vec![SkillValue::new(SkillId(40), 9)],
        figures: 2,
        hit_points_per_figure: 4,
        transport_capacity: 0,
        ranged_ammo: 0,
        production_cost: 20,
        upkeep_gold: 1,
        upkeep_mana: 0,
    });

    let config = AiConfig::default();
    let rating = rate_unit(&fresh_unit(UnitDefId(40)), &lone_wizard(), &rules, &config).unwrap();
    assert_eq!(rating.current, 0);
    // The discounted potential keeps the average well under the raw total
    assert!(rating.average <= (90.0 * config.noncombatant_potential_discount) as i32);
}

proptest! {
    /// Past the threshold, value T+k earns strictly less than k extra
    /// full-rate points would
    #[test]
    fn prop_diminishing_beats_nothing_but_trails_full_rate(
        threshold in 1i32..20,
        per_point in 2i32..10,
        extra in 1i32..30,
    ) {
        let at_threshold = additive_contribution(threshold, per_point, Some(threshold));
        let beyond = additive_contribution(threshold + extra, per_point, Some(threshold));
        prop_assert!(beyond > at_threshold);
        prop_assert!(
            beyond - at_threshold < i64::from(extra) * i64::from(per_point)
        );
    }

    /// Each successive point past the threshold contributes no more than
    /// the one before it, and always at least 1
    #[test]
    fn prop_marginal_contribution_non_increasing(
        threshold in 1i32..20,
        per_point in 1i32..10,
        span in 2i32..30,
    ) {
        let mut previous_marginal = i64::MAX;
        for value in (threshold + 1)..(threshold + span) {
            let marginal = additive_contribution(value, per_point, Some(threshold))
                - additive_contribution(value - 1, per_point, Some(threshold));
            prop_assert!(marginal >= 1);
            prop_assert!(marginal <= previous_marginal);
            previous_marginal = marginal;
        }
    }

    /// Without a threshold the contribution is exactly linear
    #[test]
    fn prop_unthresholded_contribution_is_linear(
        value in 0i32..100,
        per_point in 1i32..10,
    ) {
        prop_assert_eq!(
            additive_contribution(value, per_point, None),
            i64::from(value) * i64::from(per_point)
        );
    }
}
