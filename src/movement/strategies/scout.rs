//! Exploration strategies

use rand_chacha::ChaCha8Rng;

use crate::movement::context::StrategyContext;
use crate::movement::decision::MovementDecision;
use crate::rating::classify::UnitCategory;
use crate::world::snapshot::KnownTerrain;

/// Push the frontier: known land cells that border something unseen
pub fn scout_frontier(ctx: &StrategyContext, rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    if ctx.stack.category != UnitCategory::Combat {
        return None;
    }
    let tiles = &ctx.world.tiles;
    let candidates = tiles.coords().filter(|&coord| {
        let Some(tile) = tiles.get(coord) else {
            return false;
        };
        if !tile.known || tile.terrain != KnownTerrain::Land || coord == ctx.at() {
            return false;
        }
        tiles
            .neighbors(coord)
            .iter()
            .any(|&n| tiles.get(n).map(|t| !t.known).unwrap_or(false))
    });
    ctx.closest(candidates, rng).map(MovementDecision::MoveTo)
}

/// Head for any unseen cell at all
pub fn scout_anywhere(ctx: &StrategyContext, rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    if ctx.stack.category != UnitCategory::Combat {
        return None;
    }
    let tiles = &ctx.world.tiles;
    let candidates = tiles
        .coords()
        .filter(|&coord| tiles.get(coord).map(|t| !t.known).unwrap_or(false));
    ctx.closest(candidates, rng).map(MovementDecision::MoveTo)
}
