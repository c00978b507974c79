//! Attack strategies
//!
//! Both share one targeting rule; the only difference between a wizard's
//! army and a rampaging monster is whether the strength comparison gate
//! applies, carried by the context's reckless flag.

use rand_chacha::ChaCha8Rng;

use crate::movement::context::StrategyContext;
use crate::movement::decision::MovementDecision;

/// Whether this stack would commit to a fight of `enemy_strength`
fn worth_attacking(ctx: &StrategyContext, enemy_strength: i32) -> bool {
    ctx.reckless || ctx.stack_average() > enemy_strength
}

fn attack_targets(
    ctx: &StrategyContext,
    rng: &mut ChaCha8Rng,
    stationary: bool,
) -> Option<MovementDecision> {
    if !ctx.stack.category.counts_for_strength() {
        return None;
    }

    let candidates = ctx.enemy_cells().filter_map(|(coord, strength)| {
        let has_site = ctx
            .world
            .tile(coord)
            .and_then(|t| t.site)
            .is_some();
        if has_site != stationary {
            return None;
        }
        if !worth_attacking(ctx, strength) {
            return None;
        }
        Some(coord)
    });

    ctx.closest(candidates, rng).map(MovementDecision::MoveTo)
}

/// Attack a garrisoned site: a node, lair, tower, or city
pub fn attack_stationary(ctx: &StrategyContext, rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    attack_targets(ctx, rng, true)
}

/// Attack an enemy stack in the open
pub fn attack_wandering(ctx: &StrategyContext, rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    attack_targets(ctx, rng, false)
}
