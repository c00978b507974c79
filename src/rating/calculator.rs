//! Unit combat-worth rating
//!
//! Turns a resolved profile into a scalar rating: additive skill weights
//! (with diminishing returns past a per-skill threshold) summed into a
//! total, scaled by a multiplier that starts from remaining hit points and
//! absorbs multiplicative skill modifiers.

use crate::core::config::AiConfig;
use crate::core::error::Result;
use crate::rules::defs::RatingModifier;
use crate::rules::ruleset::Ruleset;
use crate::world::snapshot::{KnownWizard, Unit};

use super::profile::{resolve_current, resolve_potential, UnitProfile};

/// A unit's rating pair for this turn
///
/// `current` scores the unit as it stands; `average` folds in what the
/// unit could be once healed, experienced, and properly equipped. Both are
/// derived values, recomputed on demand and discarded with the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitRating {
    pub current: i32,
    pub average: i32,
}

/// Which resolution the rating is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingMode {
    Current,
    Potential,
}

/// Total additive contribution of one skill
///
/// Points up to the threshold earn `per_point` each; each point past it
/// earns one less than the point before, floored at 1 per point.
pub fn additive_contribution(value: i32, per_point: i32, diminishing_after: Option<i32>) -> i64 {
    let threshold = match diminishing_after {
        Some(t) => t,
        None => return i64::from(value) * i64::from(per_point),
    };
    if value <= threshold {
        return i64::from(value) * i64::from(per_point);
    }

    let mut total = i64::from(threshold) * i64::from(per_point);
    let mut marginal = per_point;
    for _ in threshold..value {
        marginal = (marginal - 1).max(1);
        total += i64::from(marginal);
    }
    total
}

/// Rate one resolved profile
pub fn rate_profile(
    profile: &UnitProfile,
    rules: &Ruleset,
    mode: RatingMode,
    config: &AiConfig,
) -> Result<i32> {
    // Units that cannot fight rate zero as they stand; their potential is
    // still computed so the AI can tell a wounded hero from a settler, but
    // it is heavily discounted.
    if !profile.caps.is_combatant() && mode == RatingMode::Current {
        return Ok(0);
    }

    let mut multiplier = 1.0 + (profile.hp_fraction - 1.0) / 10.0;
    let mut total: i64 = 0;

    for (&skill_id, &value) in &profile.skills {
        let def = rules.skill(skill_id)?;
        match def.rating {
            None => {}
            Some(RatingModifier::Multiplicative { factor }) => {
                multiplier *= factor;
            }
            Some(RatingModifier::Additive {
                per_point,
                diminishing_after,
            }) => {
                total += additive_contribution(value, per_point, diminishing_after);
            }
        }
    }

    let mut rating = (total as f64 * multiplier).floor();
    if !profile.caps.is_combatant() {
        rating = (rating * config.noncombatant_potential_discount).floor();
    }
    Ok(rating as i32)
}

/// Compute a unit's current and average ratings
pub fn rate_unit(
    unit: &Unit,
    wizard: &KnownWizard,
    rules: &Ruleset,
    config: &AiConfig,
) -> Result<UnitRating> {
    let current_profile = resolve_current(unit, rules)?;
    let current = rate_profile(&current_profile, rules, RatingMode::Current, config)?;

    let potential_profile = resolve_potential(unit, wizard, rules, config)?;
    let potential = rate_profile(&potential_profile, rules, RatingMode::Potential, config)?;

    Ok(UnitRating {
        current,
        average: (current + potential) / 2,
    })
}
