//! One AI player's full overland turn
//!
//! Wires the rating pass, defense evaluation, construction advice, and
//! per-stack movement decisions together in the order the systems expect
//! them. Everything runs to completion synchronously; the host calls this
//! once per AI player per game turn.

use rand_chacha::ChaCha8Rng;

use crate::construction::constructable_units;
use crate::core::config::AiConfig;
use crate::core::error::Result;
use crate::core::types::{MapCoord, PlayerId};
use crate::defense::evaluator::{evaluate_defense, DefenseDeficit};
use crate::defense::grids::accumulate_ratings;
use crate::movement::context::{PlayerPlans, StrategyContext};
use crate::movement::decision::MovementOutcome;
use crate::movement::executor::decide_and_execute;
use crate::movement::strategies::MovementCode;
use crate::rating::classify::UnitCategory;
use crate::rules::ruleset::Ruleset;
use crate::world::interfaces::{Pathfinder, ProductionOracle, WorldMutator};
use crate::world::snapshot::KnownWorld;

/// What happened to one mobile stack
#[derive(Debug, Clone, Copy)]
pub struct StackOutcome {
    pub location: MapCoord,
    pub category: UnitCategory,
    pub outcome: MovementOutcome,
}

/// Summary of a completed AI turn
#[derive(Debug, Clone)]
pub struct TurnReport {
    /// The deficit list the turn worked from, most urgent first
    pub deficits: Vec<DefenseDeficit>,
    pub outcomes: Vec<StackOutcome>,
}

/// Run one player's full strategic turn
#[allow(clippy::too_many_arguments)]
pub fn run_player_turn(
    world: &KnownWorld,
    player: PlayerId,
    rules: &Ruleset,
    config: &AiConfig,
    plans: &PlayerPlans,
    codes: &[MovementCode],
    pathfinder: &dyn Pathfinder,
    mutator: &mut dyn WorldMutator,
    oracle: &dyn ProductionOracle,
    rng: &mut ChaCha8Rng,
) -> Result<TurnReport> {
    let wizard = world.wizard(player)?;
    let reckless = wizard.kind.is_reckless();

    let grids = accumulate_ratings(world, player, rules, config)?;
    let analysis = evaluate_defense(world, &grids, player, rules, config)?;
    let reinforcements = constructable_units(world, player, rules, oracle, config)?;

    let mut outcomes = Vec::with_capacity(analysis.mobile.len());
    for stack in &analysis.mobile {
        let unit_ids = stack.unit_ids();
        let costs = pathfinder.cost_grid(world, &unit_ids, stack.location);
        let ctx = StrategyContext::new(
            player,
            stack,
            world,
            rules,
            config,
            &grids,
            &analysis,
            &costs,
            plans,
            &reinforcements,
            reckless,
        )?;
        let outcome = decide_and_execute(&ctx, codes, rng, pathfinder, mutator)?;
        outcomes.push(StackOutcome {
            location: stack.location,
            category: stack.category,
            outcome,
        });
    }

    tracing::debug!(
        "turn for {:?}: {} stacks handled, {} deficits outstanding",
        player,
        outcomes.len(),
        analysis.deficits.len()
    );

    Ok(TurnReport {
        deficits: analysis.deficits,
        outcomes,
    })
}
