//! Carry a movement decision out against the world
//!
//! The single decide -> attempt -> outcome step. Everything that can go
//! "wrong" in the normal course of play (no allowance, nothing chosen,
//! no route, rejected order) is an outcome, not an error; errors are
//! reserved for broken references and broken invariants.

use rand_chacha::ChaCha8Rng;

use crate::core::error::Result;
use crate::core::types::UnitId;
use crate::movement::context::StrategyContext;
use crate::movement::decision::{MovementDecision, MovementOutcome, SpecialOrder};
use crate::movement::strategies::{decide_movement, MovementCode};
use crate::rating::profile::resolve_current;
use crate::world::interfaces::{Pathfinder, WorldMutator};

/// Decide with the code pipeline, then execute whatever came out
pub fn decide_and_execute(
    ctx: &StrategyContext,
    codes: &[MovementCode],
    rng: &mut ChaCha8Rng,
    pathfinder: &dyn Pathfinder,
    mutator: &mut dyn WorldMutator,
) -> Result<MovementOutcome> {
    if ctx.movement_left() <= 0 {
        return Ok(MovementOutcome::NoMovementLeft);
    }
    let decision = decide_movement(codes, ctx, rng).map(|(_, d)| d);
    execute_decision(ctx, decision, pathfinder, mutator)
}

/// Map one decision to its outcome
pub fn execute_decision(
    ctx: &StrategyContext,
    decision: Option<MovementDecision>,
    pathfinder: &dyn Pathfinder,
    mutator: &mut dyn WorldMutator,
) -> Result<MovementOutcome> {
    match decision {
        // "Stay" carries neither destination nor order: nothing to do.
        None | Some(MovementDecision::Stay) => Ok(MovementOutcome::NoDestinationChosen),
        Some(MovementDecision::MoveTo(destination)) => {
            let unit_ids = ctx.stack.unit_ids();
            let Some(path) = pathfinder.route(ctx.world, &unit_ids, ctx.at(), destination)
            else {
                return Ok(MovementOutcome::NoRouteFound);
            };
            if destination == ctx.at() {
                return Ok(MovementOutcome::AlreadyAtDestination);
            }
            let report = mutator.execute_move(&unit_ids, &path)?;
            Ok(if report.combat_started {
                MovementOutcome::MovedAndStartedCombat
            } else {
                MovementOutcome::Moved
            })
        }
        Some(MovementDecision::Special(order)) => {
            let Some(unit) = order_capable_unit(ctx, order)? else {
                tracing::warn!(
                    "stack at {:?} was ordered to {:?} but no member can",
                    ctx.at(),
                    order
                );
                return Ok(MovementOutcome::MalformedDecision);
            };
            let report = mutator.execute_special_order(unit, order)?;
            if report.accepted {
                Ok(MovementOutcome::SpecialOrderExecuted)
            } else {
                tracing::debug!(
                    "special order {:?} at {:?} rejected: {}",
                    order,
                    ctx.at(),
                    report.reason.as_deref().unwrap_or("no reason given")
                );
                Ok(MovementOutcome::SpecialOrderRejected)
            }
        }
    }
}

/// First member able to carry out the order
fn order_capable_unit(ctx: &StrategyContext, order: SpecialOrder) -> Result<Option<UnitId>> {
    for unit in ctx.units() {
        let profile = resolve_current(unit, ctx.rules)?;
        let capable = match order {
            SpecialOrder::FoundCity => profile.caps.found_outpost,
            SpecialOrder::BuildRoad => profile.caps.build_road,
            SpecialOrder::MeldNode => profile.caps.meld_node,
            SpecialOrder::Purify => profile.caps.purify,
        };
        if capable {
            return Ok(Some(unit.id));
        }
    }
    Ok(None)
}
