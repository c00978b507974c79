//! One player's combat round
//!
//! Orders the player's live units by role, then lets each cast, attack,
//! or advance. Reports whether anything useful happened so the combat
//! loop can detect stalemates.

use crate::core::config::AiConfig;
use crate::core::error::Result;
use crate::core::types::PlayerId;

use super::state::{CombatActions, CombatRole, CombatView};
use super::targeting::select_target;

/// Act with every eligible unit of `player` once
///
/// Units whose position is cleared mid-round (an earlier attack ended
/// the combat for them) are skipped; so is everything after the combat
/// itself ends.
pub fn run_combat_round(
    view: &CombatView,
    player: PlayerId,
    config: &AiConfig,
    actions: &mut dyn CombatActions,
) -> Result<bool> {
    let threshold = config.caster_reserve_threshold;

    let mut ordered: Vec<_> = view
        .units
        .iter()
        .filter(|u| {
            u.owner == player && u.alive && u.position.is_some() && u.movement_left > 0
        })
        .collect();
    ordered.sort_by_key(|u| CombatRole::of(u, threshold));

    let mut any_useful_action = false;

    for unit in ordered {
        if actions.is_ended() {
            break;
        }
        let Some(position) = actions.position(unit.id) else {
            continue;
        };

        if unit.has_casting_reserve(threshold) && actions.try_cast(unit.id)? {
            tracing::debug!("combat: {:?} cast a spell", unit.id);
            any_useful_action = true;
            continue;
        }

        if !unit.has_attack() {
            continue;
        }

        let Some(target) =
            select_target(view, unit, position, player, threshold, actions)
        else {
            continue;
        };
        let Some(target_pos) = actions.position(target.candidate) else {
            continue;
        };

        let in_melee_reach = position.is_adjacent(&target_pos);
        let in_ranged_reach = actions.can_ranged_attack(unit.id, target.candidate);

        if in_melee_reach || in_ranged_reach {
            tracing::debug!(
                "combat: {:?} attacks {:?} (score {})",
                unit.id,
                target.candidate,
                target.score
            );
            actions.attack(unit.id, target.candidate)?;
            any_useful_action = true;
        } else if actions.step_toward(unit.id, target_pos)? {
            tracing::trace!(
                "combat: {:?} advances toward {:?}",
                unit.id,
                target.candidate
            );
            any_useful_action = true;
        }
    }

    Ok(any_useful_action)
}
