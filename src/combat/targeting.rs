//! Enemy target selection
//!
//! Recomputed from scratch every time a unit is about to act; combat
//! state moves under us between actions.

use crate::core::types::{CombatCoord, PlayerId, UnitId};

use super::state::{CombatActions, CombatUnit, CombatView};

/// One scored enemy candidate
#[derive(Debug, Clone, Copy)]
pub struct CombatTarget {
    pub candidate: UnitId,
    pub score: i32,
}

/// Threat score of an enemy unit
///
/// Live casters die first, then anyone still holding ammunition, then
/// the rest.
pub fn target_score(enemy: &CombatUnit, caster_threshold: i32) -> i32 {
    if enemy.has_casting_reserve(caster_threshold) {
        3
    } else if enemy.can_shoot() {
        2
    } else {
        1
    }
}

/// Pick the best target for one attacker
///
/// Score decides; among equal scores, a target we can shoot right now
/// beats one we cannot, and the geometrically closest wins after that.
/// Remaining ties keep the earliest candidate, so selection is stable.
pub fn select_target(
    view: &CombatView,
    attacker: &CombatUnit,
    attacker_pos: CombatCoord,
    player: PlayerId,
    caster_threshold: i32,
    actions: &dyn CombatActions,
) -> Option<CombatTarget> {
    let mut best: Option<(i32, bool, i32, CombatTarget)> = None;

    for enemy in view.living_enemies_of(player) {
        let Some(enemy_pos) = enemy.position else {
            continue;
        };
        let score = target_score(enemy, caster_threshold);
        let shootable = actions.can_ranged_attack(attacker.id, enemy.id);
        let distance = attacker_pos.distance(&enemy_pos);

        let better = match &best {
            None => true,
            Some((s, sh, d, _)) => {
                (score, shootable, -distance) > (*s, *sh, -*d)
            }
        };
        if better {
            best = Some((
                score,
                shootable,
                distance,
                CombatTarget {
                    candidate: enemy.id,
                    score,
                },
            ));
        }
    }

    best.map(|(_, _, _, target)| target)
}
