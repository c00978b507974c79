//! Base relation between two AI players
//!
//! Wizards who study the same realms get along; wizards at opposite ends
//! of the alignment scale do not. The result seeds the proposal layer's
//! threshold checks (pacts, alliances, threats).

use crate::core::config::AiConfig;
use crate::core::error::Result;
use crate::rules::ruleset::Ruleset;
use crate::world::snapshot::KnownWizard;

/// Signed alignment of a player: every book pick contributes its realm's
/// alignment weight
pub fn alignment(wizard: &KnownWizard, rules: &Ruleset) -> Result<i32> {
    let mut total = 0;
    for &(realm_id, count) in &wizard.picks {
        let realm = rules.realm(realm_id)?;
        total += realm.alignment * count as i32;
    }
    Ok(total)
}

/// Book picks held by both, each realm counted up to the smaller holding
fn shared_picks(a: &KnownWizard, b: &KnownWizard) -> i32 {
    let mut shared = 0;
    for &(realm_a, count_a) in &a.picks {
        for &(realm_b, count_b) in &b.picks {
            if realm_a == realm_b {
                shared += count_a.min(count_b) as i32;
            }
        }
    }
    shared
}

/// Symmetric base relation between two players, clamped
pub fn base_relation(
    a: &KnownWizard,
    b: &KnownWizard,
    rules: &Ruleset,
    config: &AiConfig,
) -> Result<i32> {
    let shared = shared_picks(a, b);
    let alignment_gap = (alignment(a, rules)? - alignment(b, rules)?).abs();

    let clamp = config.diplomacy_relation_clamp;
    let score = config.diplomacy_base_relation
        + config.diplomacy_shared_book_weight * shared
        - config.diplomacy_alignment_weight * alignment_gap;
    Ok(score.clamp(-clamp, clamp))
}
